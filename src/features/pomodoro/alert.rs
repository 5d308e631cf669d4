//! Audible alert fired when a session runs out.

use std::io::Write;

use super::driver::TickOutcome;
use crate::error::PomoError;

/// Something that can get the user's attention.
#[cfg_attr(test, mockall::automock)]
pub trait Alert {
    /// Signal that a session expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the alert could not be delivered.
    fn ring(&mut self) -> Result<(), PomoError>;
}

/// Rings the terminal bell on the wrapped writer.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    /// Wrap a writer, usually stdout.
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Alert for TerminalBell<W> {
    fn ring(&mut self) -> Result<(), PomoError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Alert that does nothing, used when alerts are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Alert for Silent {
    fn ring(&mut self) -> Result<(), PomoError> {
        Ok(())
    }
}

/// Ring the alert if the tick ended a session.
///
/// Alert failures are logged and swallowed; the countdown keeps going.
pub fn announce(outcome: &TickOutcome, alert: &mut dyn Alert) {
    if let TickOutcome::Expired { previous, next } = outcome {
        if let Err(e) = alert.ring() {
            tracing::warn!(%previous, next = %next.label, error = %e, "alert failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pomodoro::session::{Session, SessionLabel};

    #[test]
    fn test_terminal_bell_writes_bel() {
        let mut buf = Vec::new();
        TerminalBell::new(&mut buf).ring().unwrap();
        assert_eq!(buf, b"\x07");
    }

    #[test]
    fn test_announce_rings_on_expiry() {
        let mut alert = MockAlert::new();
        alert.expect_ring().times(1).returning(|| Ok(()));

        let outcome = TickOutcome::Expired {
            previous: SessionLabel::Focusing,
            next: Session::on_break(5),
        };
        announce(&outcome, &mut alert);
    }

    #[test]
    fn test_announce_quiet_on_tick() {
        let mut alert = MockAlert::new();
        alert.expect_ring().times(0);

        announce(&TickOutcome::Ticked(Session::focusing(25)), &mut alert);
        announce(&TickOutcome::Idle, &mut alert);
    }

    #[test]
    fn test_announce_survives_failure() {
        let mut alert = MockAlert::new();
        alert
            .expect_ring()
            .times(1)
            .returning(|| Err(PomoError::Terminal("closed".to_string())));

        let outcome = TickOutcome::Expired {
            previous: SessionLabel::OnBreak,
            next: Session::focusing(25),
        };
        announce(&outcome, &mut alert);
    }
}
