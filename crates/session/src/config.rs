use shared_types::AppConfig;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Default config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding [`CONFIG_PATH`].
pub const CONFIG_ENV: &str = "CMS_CONFIG";

/// Parse a config file, falling back to defaults when it is missing or
/// unparseable.
pub fn read_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => {
                info!(path = %path.display(), session = ?config.session, "Loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                AppConfig::default()
            }
        },
        Err(e) => {
            info!(path = %path.display(), error = %e, "Config not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Load config once per process. Later calls return the cached value.
///
/// `.env` is read first so `CMS_CONFIG` can be set there.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        read_config(Path::new(&path))
    })
}

/// The loaded config, or defaults if [`load_config`] has not run.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}
