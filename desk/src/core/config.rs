//! Client configuration from environment variables.
//!
//! `.env` in the working directory is loaded first (see `main.rs`), so every key can
//! live there instead of the shell.
//!
//! | Variable | Default |
//! |---|---|
//! | `BIZDESK_API_URL` | `http://localhost:8080/api` |
//! | `BIZDESK_STORAGE_PATH` | `./bizdesk-storage.json` |
//! | `BIZDESK_HTTP_TIMEOUT_SECS` | `30` |

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_STORAGE_PATH: &str = "./bizdesk-storage.json";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Base address every API path is appended to, without a trailing slash
    pub api_url: String,
    /// JSON file backing the session store
    pub storage_path: PathBuf,
    pub http_timeout: Duration,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl DeskConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_url = get_env_or("BIZDESK_API_URL", DEFAULT_API_URL);
        let storage_path = PathBuf::from(get_env_or("BIZDESK_STORAGE_PATH", DEFAULT_STORAGE_PATH));
        let timeout_secs = get_env_parse_or("BIZDESK_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(Self {
            api_url: normalize_base_url(&api_url),
            storage_path,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(normalize_base_url("http://api.local/api/ "), "http://api.local/api");
        assert_eq!(normalize_base_url(DEFAULT_API_URL), DEFAULT_API_URL);
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let config = DeskConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }
}
