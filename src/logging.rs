use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::WriteLogger;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV_VAR: &str = "CONNECT_FOUR_LOG";

/// Logging options. Output goes to a file so it does not draw over the
/// terminal UI.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of off, error, warn, info, debug, trace
    pub level: String,
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".into(),
            file: PathBuf::from("connect_four.log"),
        }
    }
}

impl LogConfig {
    /// Parsed level, `None` if the string is not a known level.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.level.parse().ok()
    }
}

/// Resolve the effective level: `CONNECT_FOUR_LOG` wins over the config, and
/// anything unparseable falls back to `info`.
fn effective_level(config: &LogConfig, env_level: Option<String>) -> LevelFilter {
    env_level
        .and_then(|lvl| lvl.parse().ok())
        .or_else(|| config.level_filter())
        .unwrap_or(LevelFilter::Info)
}

/// Install a `WriteLogger` on the configured file.
///
/// Returns `Ok(true)` if this call installed the logger. Only the first call
/// in a process installs one; later calls leave it in place and return
/// `Ok(false)`. Level `off` opens no file.
pub fn init_logging(config: &LogConfig) -> io::Result<bool> {
    let level = effective_level(config, env::var(LOG_ENV_VAR).ok());
    if level == LevelFilter::Off {
        return Ok(false);
    }

    let file = File::options()
        .create(true)
        .append(true)
        .open(&config.file)?;
    let logger = WriteLogger::new(level, simplelog::Config::default(), file);
    if log::set_boxed_logger(logger).is_err() {
        return Ok(false);
    }
    log::set_max_level(level);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_parsing() {
        let mut config = LogConfig::default();
        assert_eq!(config.level_filter(), Some(LevelFilter::Info));
        config.level = "TRACE".into();
        assert_eq!(config.level_filter(), Some(LevelFilter::Trace));
        config.level = "off".into();
        assert_eq!(config.level_filter(), Some(LevelFilter::Off));
        config.level = "loud".into();
        assert_eq!(config.level_filter(), None);
    }

    #[test]
    fn test_env_level_overrides_config() {
        let config = LogConfig::default();
        assert_eq!(effective_level(&config, Some("debug".into())), LevelFilter::Debug);
        assert_eq!(effective_level(&config, Some("bogus".into())), LevelFilter::Info);
        assert_eq!(effective_level(&config, None), LevelFilter::Info);
    }

    #[test]
    fn test_off_level_creates_no_file() {
        if env::var(LOG_ENV_VAR).is_ok() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            level: "off".into(),
            file: dir.path().join("game.log"),
        };

        assert!(!init_logging(&config).unwrap());
        assert!(!config.file.exists());
    }
}
