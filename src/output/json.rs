//! JSON output formatting for pomo.

use serde::Serialize;
use serde_json::json;

use crate::error::PomoError;
use crate::features::pomodoro::StatusSnapshot;

/// Format a status snapshot as a single JSON line.
///
/// Headless mode prints one of these per second, so the output is compact
/// rather than pretty-printed.
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn format_status_json(status: &StatusSnapshot) -> Result<String, PomoError> {
    Ok(serde_json::to_string(status)?)
}

/// Format an expiry event as a single JSON line.
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn format_expired_json(status: &StatusSnapshot) -> Result<String, PomoError> {
    let output = json!({
        "event": "session_expired",
        "status": status,
    });
    Ok(serde_json::to_string(&output)?)
}

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pomodoro::{Pomodoro, TimerConfig};

    #[test]
    fn test_status_json_stopped() {
        let status = Pomodoro::new(TimerConfig::new(30, 10)).snapshot();
        let json = format_status_json(&status).unwrap();

        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["label"], serde_json::Value::Null);
        assert_eq!(value["running"], false);
        assert_eq!(value["focus_duration_minutes"], 30);
        assert_eq!(value["break_duration_minutes"], 10);
    }

    #[test]
    fn test_status_json_running() {
        let mut pomodoro = Pomodoro::default();
        pomodoro.play_pause();
        pomodoro.on_interval();

        let json = format_status_json(&pomodoro.snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["label"], "focusing");
        assert_eq!(value["time_remaining"], 1499);
        assert_eq!(value["remaining"], "24:59");
    }

    #[test]
    fn test_expired_json() {
        let status = Pomodoro::default().snapshot();
        let json = format_expired_json(&status).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["event"], "session_expired");
        assert!(value["status"].is_object());
    }
}
