//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::get_env_or;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_LEVEL: &str = "bizdesk=info,warn";
pub const LOG_FILE_PREFIX: &str = "bizdesk.log";

/// Line format of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Directory of the daily-rolling log files
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "bizdesk=debug,info")
    pub log_level: String,
    pub format: LogFormat,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_dir: PathBuf::from(get_env_or("BIZDESK_LOG_DIR", DEFAULT_LOG_DIR)),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            format: parse_format(&get_env_or("BIZDESK_LOG_FORMAT", "text")),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

fn parse_format(raw: &str) -> LogFormat {
    if raw.trim().eq_ignore_ascii_case("json") {
        LogFormat::Json
    } else {
        LogFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DebugConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_level, "bizdesk=info,warn");
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("JSON"), LogFormat::Json);
        assert_eq!(parse_format(" json "), LogFormat::Json);
        assert_eq!(parse_format("text"), LogFormat::Text);
        assert_eq!(parse_format("pretty"), LogFormat::Text);
    }
}
