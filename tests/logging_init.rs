//! Runs in its own process so the global logger starts uninstalled.

use connect_four::logging::{init_logging, LogConfig, LOG_ENV_VAR};
use log::Log;

#[test]
fn second_init_keeps_first_logger() {
    if std::env::var(LOG_ENV_VAR).is_ok() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let first = LogConfig {
        level: "info".into(),
        file: dir.path().join("first.log"),
    };
    let second = LogConfig {
        level: "info".into(),
        file: dir.path().join("second.log"),
    };

    assert!(init_logging(&first).unwrap());
    assert!(!init_logging(&second).unwrap());

    log::info!("game started");
    log::logger().flush();

    let written = std::fs::read_to_string(&first.file).unwrap();
    assert!(written.contains("game started"));
    let other = std::fs::read_to_string(&second.file).unwrap_or_default();
    assert!(!other.contains("game started"));
}
