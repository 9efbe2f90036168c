//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON file to load instead of the bundled dataset
    pub dataset_path: Option<PathBuf>,
}

/// Static host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built front end (`index.html` + wasm bundle)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("folio-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// First of the standard config locations that exists
    ///
    /// A file found here that cannot be read or parsed is an error for the
    /// caller, not a reason to fall through to the next location.
    pub fn default_path() -> Option<PathBuf> {
        let candidates = [
            dirs::config_dir().map(|p| p.join("folio").join("config.toml")),
            Some(PathBuf::from("/etc/folio/config.toml")),
            Some(PathBuf::from("./folio.toml")),
        ];

        first_existing(candidates.into_iter().flatten())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = lookup("FOLIO_DATASET") {
            self.catalog.dataset_path = Some(PathBuf::from(path));
        }

        if let Some(host) = lookup("FOLIO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FOLIO_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "FOLIO_PORT",
                value: port,
            })?;
        }
        if let Some(dir) = lookup("FOLIO_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("FOLIO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FOLIO_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| path.exists())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Folio Configuration
#
# Environment variables override these settings:
# - FOLIO_DATASET
# - FOLIO_HOST
# - FOLIO_PORT
# - FOLIO_DIST_DIR
# - FOLIO_LOG_LEVEL
# - FOLIO_LOG_FORMAT

[catalog]
# JSON dataset to use instead of the bundled one
# dataset_path = "data/projects.json"

[server]
# Static host address
host = "127.0.0.1"
port = 8080

# Built front end (trunk build --release in folio-ui/)
dist_dir = "folio-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
