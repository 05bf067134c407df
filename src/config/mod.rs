use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, including the `/api` prefix.
    pub base_url: String,
    /// Fixed deadline applied to every request. Past it the call fails
    /// as a network error.
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the session file. `None` resolves to
    /// `$HOME/.config/kanban/cli` at first use.
    pub config_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = var("KANBAN_API_URL") {
            // Reject unparseable URLs early instead of failing on every request
            match Url::parse(&v) {
                Ok(url) => self.api.base_url = url.to_string().trim_end_matches('/').to_string(),
                Err(e) => tracing::warn!("ignoring invalid KANBAN_API_URL {:?}: {}", v, e),
            }
        }
        if let Some(v) = var("KANBAN_REQUEST_TIMEOUT_SECS") {
            self.api.request_timeout_secs = v.parse().unwrap_or(self.api.request_timeout_secs);
        }
        if let Some(v) = var("KANBAN_CLI_CONFIG_DIR") {
            self.storage.config_dir = Some(PathBuf::from(v));
        }
        self
    }

    fn defaults() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                request_timeout_secs: 5,
            },
            storage: StorageConfig { config_dir: None },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
