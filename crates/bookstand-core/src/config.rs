use std::env;
use std::path::PathBuf;

use crate::auth::GateCredentials;
use crate::constants::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER, DEFAULT_API_URL};

/// Runtime configuration resolved from the environment with built-in
/// defaults. Command line flags are applied on top by the binary.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Base URL of the bookstore API, kept without a trailing slash.
    pub api_url: String,
    /// Directory for local state such as the session marker.
    pub data_dir: PathBuf,
    /// Log file path, if file logging is enabled.
    pub log_file: Option<PathBuf>,
    pub credentials: GateCredentials,
}

impl CoreConfig {
    pub fn from_env() -> Self {
        Self::resolve(|key| env::var(key).ok())
    }

    fn resolve(get: impl Fn(&str) -> Option<String>) -> Self {
        let api_url =
            get("BOOKSTAND_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let data_dir = get("BOOKSTAND_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let log_file = get("BOOKSTAND_LOG_FILE").map(PathBuf::from);
        let username =
            get("BOOKSTAND_ADMIN_USER").unwrap_or_else(|| DEFAULT_ADMIN_USER.to_string());
        let password = get("BOOKSTAND_ADMIN_PASSWORD")
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());

        Self {
            api_url: normalize_api_url(&api_url),
            data_dir,
            log_file,
            credentials: GateCredentials::new(username, password),
        }
    }

    pub fn set_api_url(&mut self, url: &str) {
        self.api_url = normalize_api_url(url);
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookstand")
}

/// Trim trailing slashes so endpoint paths can be appended verbatim.
fn normalize_api_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
