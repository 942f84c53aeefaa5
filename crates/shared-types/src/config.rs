use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "cms_user";
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
pub const DEFAULT_STORE_PATH: &str = ".cms/session.json";

/// Session persistence and login behaviour.
///
/// Every field has a default so that a missing or partial `[session]`
/// table still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Store key the serialized identity lives under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Simulated latency applied to every login attempt.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    /// JSON file backing the store on native targets.
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            login_delay_ms: default_login_delay_ms(),
            store_path: default_store_path(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
}
