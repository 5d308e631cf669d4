use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.env("POMO_HOME", home.path())
        .env_remove("POMO_FOCUS")
        .env_remove("POMO_BREAK")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_path_uses_pomo_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("config.yaml");
    pomo(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();
    pomo(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join("config.yaml").exists());

    pomo(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    pomo(&home)
        .args(["-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_duration_minutes\": 25"));
}

#[test]
fn test_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "timer: [1, 2]").unwrap();

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_watch_rejects_zero_cycles() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["watch", "--cycles", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cycles must be at least 1"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomo"));
}

#[test]
fn test_completions_do_not_create_home() {
    let home = TempDir::new().unwrap();
    let root = home.path().join("fresh");
    pomo(&home)
        .env("POMO_HOME", &root)
        .args(["completions", "bash"])
        .assert()
        .success();
    assert!(!root.exists());
}

#[test]
fn test_unwritable_home_warns_and_continues() {
    let home = TempDir::new().unwrap();
    let blocker = home.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    pomo(&home)
        .env("POMO_HOME", blocker.join("pomo"))
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"))
        .stderr(predicate::str::contains("logging disabled"));
}

#[test]
fn test_config_show_reflects_duration_flags() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["-o", "json", "config", "show", "--focus", "50", "--break", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_duration_minutes\": 50"))
        .stdout(predicate::str::contains("\"break_duration_minutes\": 15"));
}
