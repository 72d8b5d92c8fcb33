//! Configuration loading for radrisk.
//! Reads radrisk.toml (or the file named by RADRISK_CONFIG), then applies `.env`
//! and the PORT environment variable on top.

use radrisk_common::{HormesisVariant, RiskModel};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use thiserror::Error;

pub const CONFIG_ENV: &str = "RADRISK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "radrisk.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid host: {0}")]
    InvalidHost(String),
}

/// Deployment profile. Only affects the default port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Local,
    Deploy,
}

impl Profile {
    pub fn default_port(self) -> u16 {
        match self {
            Profile::Local  => 8050,
            Profile::Deploy => 10000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    /// Explicit port; falls back to the profile default.
    #[serde(default)]
    pub port: Option<u16>,
}

fn default_host() -> String { "0.0.0.0".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: None }
    }
}

/// What the page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_models")]
    pub models: Vec<RiskModel>,
    #[serde(default)]
    pub hormesis: HormesisVariant,
}

fn default_title()  -> String         { "Understanding Radiation Risk".to_string() }
fn default_models() -> Vec<RiskModel> { RiskModel::ALL.to_vec() }

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            models: default_models(),
            hormesis: HormesisVariant::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "toml"         => Ok(Format::Toml),
            "yaml" | "yml" => Ok(Format::Yaml),
            "json"         => Ok(Format::Json),
            _              => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Config {
    /// Load configuration for the running process.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        Self::load_from(
            std::env::var(CONFIG_ENV).ok().as_deref(),
            Path::new(DEFAULT_CONFIG_PATH),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    /// Resolve the config file, then apply the port override.
    ///
    /// `explicit` is the RADRISK_CONFIG value; when set, the file must exist.
    /// Otherwise `default_path` is read if present, else built-in defaults apply.
    pub fn load_from(
        explicit: Option<&str>,
        default_path: &Path,
        port: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => Self::from_path(path)?,
            None if default_path.exists() => Self::from_path(default_path)?,
            None => {
                tracing::info!("No {} found, using built-in defaults", default_path.display());
                Self::default()
            }
        };

        config.with_port_override(port)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!("Reading configuration from {}", path.display());
        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: Format) -> Result<Self, ConfigError> {
        let config = match format {
            Format::Toml => toml::from_str(content)?,
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Apply a PORT value (as read from the environment) over the file setting.
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = port {
            let parsed = raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
            self.server.port = Some(parsed);
        }
        Ok(self)
    }

    pub fn port(&self) -> u16 {
        self.server.port.unwrap_or_else(|| self.profile.default_port())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.server.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

mod tests;
