//! Configuration for the dojonav terminal navbar.
//!
//! Every tunable has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable. Command-line flags in `main` take
//! precedence over both.

use std::path::PathBuf;

/// Directory under `$HOME` holding the session and events fixtures.
const DATA_DIR_NAME: &str = ".dojonav";

const SESSION_FILE_NAME: &str = "session.json";

const EVENTS_FILE_NAME: &str = "events.json";

/// Default number of CSS pixels one terminal column stands for.
const DEFAULT_PX_PER_COLUMN: u32 = 10;

const DEFAULT_LOG_DIR: &str = "logs";

/// Get the directory holding session and events files.
///
/// Priority:
/// 1. `DOJONAV_DATA_DIR` env variable if set
/// 2. `~/.dojonav` (or `./.dojonav` without a home directory)
pub fn get_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("DOJONAV_DATA_DIR") {
        return PathBuf::from(path);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Get the session file path.
///
/// Priority:
/// 1. `DOJONAV_SESSION_PATH` env variable if set
/// 2. `session.json` inside [`get_data_dir`]
pub fn get_session_path() -> PathBuf {
    if let Ok(path) = std::env::var("DOJONAV_SESSION_PATH") {
        return PathBuf::from(path);
    }

    get_data_dir().join(SESSION_FILE_NAME)
}

/// Get the events file path used for the meeting badge.
///
/// Priority:
/// 1. `DOJONAV_EVENTS_PATH` env variable if set
/// 2. `events.json` inside [`get_data_dir`]
pub fn get_events_path() -> PathBuf {
    if let Ok(path) = std::env::var("DOJONAV_EVENTS_PATH") {
        return PathBuf::from(path);
    }

    get_data_dir().join(EVENTS_FILE_NAME)
}

/// Get the pixel width of one terminal column.
///
/// Priority:
/// 1. `DOJONAV_PX_PER_COLUMN` env variable if set (falls back to default if
///    the value is not a positive integer)
/// 2. `10` as fallback
pub fn get_px_per_column() -> u32 {
    if let Ok(value) = std::env::var("DOJONAV_PX_PER_COLUMN") {
        return value
            .parse()
            .ok()
            .filter(|px| *px > 0)
            .unwrap_or(DEFAULT_PX_PER_COLUMN);
    }

    DEFAULT_PX_PER_COLUMN
}

/// Get the directory for rolling log files.
///
/// Priority:
/// 1. `DOJONAV_LOG_DIR` env variable if set
/// 2. `logs` relative to the working directory
pub fn get_log_dir() -> PathBuf {
    if let Ok(path) = std::env::var("DOJONAV_LOG_DIR") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub session_path: PathBuf,
    pub events_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub breakpoints_path: Option<PathBuf>,
    pub px_per_column: u32,
    /// Pretend the viewport is this many pixels wide, ignoring the terminal.
    pub fixed_width: Option<u32>,
    /// "light" or "dark"; `None` defers to `DOJONAV_THEME`.
    pub theme: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session_path: get_session_path(),
            events_path: get_events_path(),
            catalog_path: None,
            breakpoints_path: None,
            px_per_column: get_px_per_column(),
            fixed_width: None,
            theme: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_session_path() {
        let path = get_session_path();
        match std::env::var("DOJONAV_SESSION_PATH") {
            Ok(val) => assert_eq!(path, PathBuf::from(val)),
            Err(_) => assert!(path.ends_with(SESSION_FILE_NAME)),
        }
    }

    #[test]
    fn test_get_events_path() {
        let path = get_events_path();
        match std::env::var("DOJONAV_EVENTS_PATH") {
            Ok(val) => assert_eq!(path, PathBuf::from(val)),
            Err(_) => assert!(path.ends_with(EVENTS_FILE_NAME)),
        }
    }

    #[test]
    fn test_get_px_per_column_default() {
        if std::env::var("DOJONAV_PX_PER_COLUMN").is_err() {
            assert_eq!(get_px_per_column(), DEFAULT_PX_PER_COLUMN);
        }
    }

    #[test]
    fn test_get_log_dir_default() {
        if std::env::var("DOJONAV_LOG_DIR").is_err() {
            assert_eq!(get_log_dir(), PathBuf::from(DEFAULT_LOG_DIR));
        }
    }
}
