// src/core/config.rs

use crate::core::common::KdSearchError;
use serde::{Deserialize, Serialize};
use std::fs; // For reading file
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration for the loader, the HTTP server and logging.
///
/// Every key is optional in a TOML file; missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Vector file loaded at startup. Without one, every request must carry its own vectors.
    pub data_path: Option<PathBuf>,
    pub listen_addr: String,
    /// Directory served for every path that is not an API route.
    pub assets_dir: PathBuf,
    pub field_separator: char,
    pub max_request_bytes: usize,
    pub request_timeout_ms: u64,
    pub log_level: String,
}

/// Builder for Config struct implementing the Builder pattern.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    data_path: Option<PathBuf>,
    listen_addr: Option<String>,
    assets_dir: Option<PathBuf>,
    field_separator: Option<char>,
    max_request_bytes: Option<usize>,
    request_timeout_ms: Option<u64>,
    log_level: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new ConfigBuilder with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vector file to load at startup
    #[must_use]
    pub fn data_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Sets the address the server binds to
    #[must_use]
    pub fn listen_addr<S: Into<String>>(mut self, addr: S) -> Self {
        self.listen_addr = Some(addr.into());
        self
    }

    /// Sets the static assets directory
    #[must_use]
    pub fn assets_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.assets_dir = Some(path.into());
        self
    }

    /// Sets the component separator of the vector file format
    #[must_use]
    pub const fn field_separator(mut self, separator: char) -> Self {
        self.field_separator = Some(separator);
        self
    }

    /// Sets the maximum accepted request body size
    #[must_use]
    pub const fn max_request_bytes(mut self, bytes: usize) -> Self {
        self.max_request_bytes = Some(bytes);
        self
    }

    /// Sets the per-request deadline in milliseconds
    #[must_use]
    pub const fn request_timeout_ms(mut self, timeout: u64) -> Self {
        self.request_timeout_ms = Some(timeout);
        self
    }

    /// Sets the log level (`error`, `warn`, `info`, `debug` or `trace`)
    #[must_use]
    pub fn log_level<S: Into<String>>(mut self, level: S) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Builds the Config instance with validation
    ///
    /// # Errors
    ///
    /// Returns `KdSearchError::Configuration` if any value is invalid.
    pub fn build(self) -> Result<Config, KdSearchError> {
        let defaults = Config::default();
        let config = Config {
            data_path: self.data_path.or(defaults.data_path),
            listen_addr: self.listen_addr.unwrap_or(defaults.listen_addr),
            assets_dir: self.assets_dir.unwrap_or(defaults.assets_dir),
            field_separator: self.field_separator.unwrap_or(defaults.field_separator),
            max_request_bytes: self.max_request_bytes.unwrap_or(defaults.max_request_bytes),
            request_timeout_ms: self.request_timeout_ms.unwrap_or(defaults.request_timeout_ms),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            listen_addr: "127.0.0.1:8080".to_string(),
            assets_dir: PathBuf::from("assets"),
            field_separator: '|',
            max_request_bytes: 2 * 1024 * 1024, // 2MB
            request_timeout_ms: 30000,          // 30 seconds
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Creates a new ConfigBuilder for fluent configuration
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `KdSearchError::Configuration` naming the first invalid value.
    pub fn validate(&self) -> Result<(), KdSearchError> {
        self.socket_addr()?;
        self.tracing_level()?;

        let sep = self.field_separator;
        if sep.is_whitespace() || sep.is_ascii_digit() || matches!(sep, '.' | '-' | '+' | 'e' | 'E') {
            return Err(KdSearchError::Configuration(format!(
                "field_separator '{}' can appear inside a number",
                sep.escape_default()
            )));
        }

        if self.max_request_bytes == 0 {
            return Err(KdSearchError::Configuration(
                "max_request_bytes must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err(KdSearchError::Configuration(
                "request_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The listen address parsed as a socket address.
    ///
    /// # Errors
    ///
    /// Returns `KdSearchError::Configuration` if `listen_addr` is not `ip:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, KdSearchError> {
        self.listen_addr.parse().map_err(|e| {
            KdSearchError::Configuration(format!("invalid listen_addr '{}': {}", self.listen_addr, e))
        })
    }

    /// The log level parsed for `tracing`.
    ///
    /// # Errors
    ///
    /// Returns `KdSearchError::Configuration` for an unknown level name.
    pub fn tracing_level(&self) -> Result<tracing::Level, KdSearchError> {
        tracing::Level::from_str(&self.log_level).map_err(|_| {
            KdSearchError::Configuration(format!("unknown log_level '{}'", self.log_level))
        })
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `KdSearchError::Configuration` if parsing or validation fails,
    /// and `KdSearchError::Io` if the file exists but cannot be read.
    pub fn load_from_file(path: &Path) -> Result<Self, KdSearchError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| {
                    KdSearchError::Configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;

                // Validate the loaded configuration
                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(KdSearchError::Io(e)),
        }
    }

    /// Loads configuration from an optional TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `KdSearchError::Configuration` if the file exists but cannot be parsed.
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, KdSearchError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}
