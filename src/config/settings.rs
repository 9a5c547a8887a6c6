//! Application settings loaded from config.toml
//!
//! Every table and field is optional. Anything left out falls back to the
//! defaults below, so an empty or missing file is a valid configuration.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{net::SocketAddr, path::Path};

/// Configuration structure representing the entire config.toml file
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// `[server]`
    pub server: ServerConfig,
    /// `[branding]`
    pub branding: BrandingConfig,
    /// `[session]`
    pub session: SessionConfig,
    /// `[design_assistant]`
    pub design_assistant: DesignAssistantConfig,
}

/// HTTP listener settings
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. `127.0.0.1:3000`
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parses the bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind.parse().map_err(Error::from)
    }
}

/// Names and symbols shown in the UI
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrandingConfig {
    /// Product name in the sidebar, login screen and page titles
    pub app_name: String,
    /// Prefix for every money amount
    pub currency_symbol: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            app_name: "Structura".to_string(),
            currency_symbol: "₱".to_string(),
        }
    }
}

/// Session cookie settings
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Cookie carrying the session id
    pub cookie_name: String,
    /// Adds the `Secure` attribute (enable behind HTTPS)
    pub secure_cookie: bool,
    /// Most signed-out sessions kept at once; the oldest is evicted first
    pub max_anonymous: usize,
    /// Seconds a signed-out session lives before the cleanup task drops it
    pub anonymous_ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "structura_session".to_string(),
            secure_cookie: false,
            max_anonymous: 1024,
            anonymous_ttl_secs: 900,
        }
    }
}

/// Simulated AI design generation
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DesignAssistantConfig {
    /// Artificial delay before a design reply, in milliseconds
    pub response_delay_ms: u64,
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses settings from TOML text
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from `path`, or the defaults when the file does not exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        load_config(path_ref)
    } else {
        tracing::info!(
            "No configuration file at {}, using defaults.",
            path_ref.display()
        );
        Ok(AppConfig::default())
    }
}
