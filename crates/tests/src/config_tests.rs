use pretty_assertions::assert_eq;
use session::config::read_config;
use shared_types::{AppConfig, SessionConfig};
use std::path::Path;

#[test]
fn test_shipped_config_matches_defaults() {
    let shipped = read_config(Path::new("../../config.toml"));
    assert_eq!(shipped, AppConfig::default());
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let config: AppConfig = toml_str("[session]\nlogin_delay_ms = 0\n");
    assert_eq!(
        config.session,
        SessionConfig {
            login_delay_ms: 0,
            ..SessionConfig::default()
        }
    );
}

fn toml_str(s: &str) -> AppConfig {
    let path = std::env::temp_dir().join(format!("cms-config-test-{}.toml", std::process::id()));
    std::fs::write(&path, s).unwrap();
    read_config(&path)
}
