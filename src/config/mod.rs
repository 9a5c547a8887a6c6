//! Configuration management: config.toml settings plus environment overrides.

/// Settings loaded from config.toml
pub mod settings;

pub use settings::{AppConfig, load_config, load_config_or_default};

use crate::errors::Result;
use tracing::{error, info};

/// Default location of the settings file
pub const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `[server] bind`
pub const BIND_ENV_VAR: &str = "STRUCTURA_BIND";

/// Applies environment overrides on top of the file settings.
#[must_use]
pub fn apply_overrides(mut config: AppConfig, bind: Option<String>) -> AppConfig {
    if let Some(bind) = bind.filter(|b| !b.trim().is_empty()) {
        info!("Overriding bind address from {}: {}", BIND_ENV_VAR, bind);
        config.server.bind = bind;
    }
    config
}

/// Loads the full application configuration.
///
/// Reads `./config.toml` (defaults when absent), applies `STRUCTURA_BIND`
/// and checks that the bind address parses.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config = load_config_or_default(CONFIG_PATH)
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    let config = apply_overrides(config, std::env::var(BIND_ENV_VAR).ok());

    config
        .server
        .bind_addr()
        .inspect_err(|e| error!("Invalid bind address {:?}: {}", config.server.bind, e))?;

    info!(
        "Configuration loaded: app {:?}, bind {}",
        config.branding.app_name, config.server.bind
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_replaces_bind() {
        let config = apply_overrides(AppConfig::default(), Some("0.0.0.0:9000".to_string()));
        assert_eq!(config.server.bind, "0.0.0.0:9000");
    }

    #[test]
    fn test_missing_or_blank_override_keeps_file_value() {
        let config = apply_overrides(AppConfig::default(), None);
        assert_eq!(config.server.bind, "127.0.0.1:3000");

        let config = apply_overrides(AppConfig::default(), Some("  ".to_string()));
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }
}
