//! Runtime configuration from environment variables.
//!
//! Read once at startup; nothing here changes afterwards.

use std::path::PathBuf;

/// Model artifact location when `STRESS_PREDICTOR_MODEL_PATH` is unset.
pub const DEFAULT_MODEL_PATH: &str = "models/svm_model.json";

/// Log file location when `STRESS_PREDICTOR_LOG_FILE` is unset.
pub const DEFAULT_LOG_FILE: &str = "stress-predictor.log";

pub const MODEL_PATH_ENV: &str = "STRESS_PREDICTOR_MODEL_PATH";
pub const LOG_MODE_ENV: &str = "STRESS_PREDICTOR_LOG_MODE";
pub const LOG_FILE_ENV: &str = "STRESS_PREDICTOR_LOG_FILE";

/// Where log output goes.
///
/// Writing logs to the terminal would corrupt the TUI (alternate screen), so
/// `Auto` logs to a file when stdout is a TTY and to stdout otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    /// Parse a mode name. Unknown values fall back to `Auto`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }

    /// Whether to log to a file, given whether stdout is interactive.
    #[must_use]
    pub fn uses_file(self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            log_mode: LogMode::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            model_path: non_empty(MODEL_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            log_mode: non_empty(LOG_MODE_ENV)
                .map(|v| LogMode::parse(&v))
                .unwrap_or(defaults.log_mode),
            log_file: non_empty(LOG_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
        }
    }
}
