//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `mibridge.toml` in the working directory (or the file named by
//! `MIBRIDGE_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::str::FromStr;

use mibridge_adapter_micli::{MiAccount, MicliConfig};
use mibridge_domain::command::DeviceId;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Vendor account credentials.
    pub account: AccountConfig,
    /// Which backend answers the commands.
    pub backend: BackendConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Vendor account settings. All optional: a missing value only surfaces when
/// a command is run.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Account identifier (`MI_USER`).
    pub user: Option<String>,
    /// Account secret (`MI_PASS`).
    pub password: Option<String>,
    /// Default device id (`MI_DID`).
    pub did: Option<String>,
}

/// Backend selection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub kind: BackendKind,
    /// Settings for [`BackendKind::Micli`].
    pub micli: MicliConfig,
}

/// Available backends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// The vendor's `micli` tool.
    #[default]
    Micli,
    /// In-memory demo devices.
    Virtual,
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "micli" => Ok(Self::Micli),
            "virtual" => Ok(Self::Virtual),
            other => Err(ConfigError::Validation(format!("unknown backend {other:?}"))),
        }
    }
}

impl Config {
    /// Load configuration from `mibridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("MIBRIDGE_CONFIG").unwrap_or_else(|_| "mibridge.toml".to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("MI_USER") {
            self.account.user = Some(val);
        }
        if let Some(val) = var("MI_PASS") {
            self.account.password = Some(val);
        }
        if let Some(val) = var("MI_DID") {
            self.account.did = Some(val);
        }
        if let Some(val) = var("MIBRIDGE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("MIBRIDGE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        let bind = var("MIBRIDGE_BIND");
        if let Some((host, port)) = bind.as_deref().and_then(|val| val.rsplit_once(':')) {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("MIBRIDGE_BACKEND") {
            self.backend.kind = val.parse()?;
        }
        if let Some(val) = var("MIBRIDGE_MICLI") {
            self.backend.micli.program = val;
        }
        if let Some(val) = var("MIBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.backend.micli.program.is_empty() {
            return Err(ConfigError::Validation(
                "micli program must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The configured default device, ignoring an empty value.
    #[must_use]
    pub fn default_did(&self) -> Option<DeviceId> {
        self.account.did.as_deref().and_then(DeviceId::parse)
    }

    /// Credentials bound to the `~/.mi.token` cache.
    #[must_use]
    pub fn mi_account(&self) -> MiAccount {
        MiAccount::new(self.account.user.clone(), self.account.password.clone())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "mibridged=info,mibridge=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
