//! Configuration management for the fairverify binaries
//!
//! Defaults, an optional TOML file, then `FAIRVERIFY_*` environment
//! overrides, validated once at the end.

use crate::errors::{ConfigurationError, VerifierResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP verification service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level; `RUST_LOG` takes precedence when set
    pub level: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

/// Configuration loader with environment variable support
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_string_lossy().to_string());
        self
    }

    /// Load configuration from file and environment variables
    pub fn load(&self) -> VerifierResult<VerifierConfig> {
        let mut config = if let Some(ref path) = self.config_path {
            self.load_from_file(path)?
        } else {
            VerifierConfig::default()
        };

        apply_overrides(&mut config, |key| env::var(key).ok())?;
        self.validate(&config)?;

        Ok(config)
    }

    fn load_from_file(&self, path: &str) -> VerifierResult<VerifierConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::LoadFailed(format!("Failed to read {}: {}", path, e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ConfigurationError::LoadFailed(format!("Failed to parse TOML: {}", e)).into()
        })
    }

    /// Validate configuration values
    pub fn validate(&self, config: &VerifierConfig) -> VerifierResult<()> {
        if config.api.port == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "api.port".to_string(),
                value: "0".to_string(),
                reason: "Port cannot be zero".to_string(),
            }
            .into());
        }

        if config.api.host.trim().is_empty() {
            return Err(ConfigurationError::MissingRequired("api.host".to_string()).into());
        }

        if config.api.request_timeout_secs < 1 {
            return Err(ConfigurationError::InvalidValue {
                field: "api.request_timeout_secs".to_string(),
                value: config.api.request_timeout_secs.to_string(),
                reason: "Timeout must be at least 1s".to_string(),
            }
            .into());
        }

        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigurationError::InvalidValue {
                field: "logging.level".to_string(),
                value: config.logging.level.clone(),
                reason: format!("Expected one of {}", LOG_LEVELS.join(", ")),
            }
            .into());
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, config: &VerifierConfig, path: &str) -> VerifierResult<()> {
        let toml_string = toml::to_string_pretty(config).map_err(|e| {
            ConfigurationError::SaveFailed(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, toml_string).map_err(|e| {
            ConfigurationError::SaveFailed(format!("Failed to write to {}: {}", path, e)).into()
        })
    }
}

/// Apply `FAIRVERIFY_*` overrides read through `lookup`
fn apply_overrides<F>(config: &mut VerifierConfig, lookup: F) -> VerifierResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("FAIRVERIFY_API_HOST") {
        config.api.host = host;
    }
    if let Some(port) = lookup("FAIRVERIFY_API_PORT") {
        config.api.port = parse_override("FAIRVERIFY_API_PORT", port, "Invalid port number")?;
    }
    if let Some(timeout) = lookup("FAIRVERIFY_REQUEST_TIMEOUT") {
        config.api.request_timeout_secs =
            parse_override("FAIRVERIFY_REQUEST_TIMEOUT", timeout, "Invalid timeout value")?;
    }
    if let Some(level) = lookup("FAIRVERIFY_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(ansi) = lookup("FAIRVERIFY_LOG_ANSI") {
        config.logging.ansi = parse_override("FAIRVERIFY_LOG_ANSI", ansi, "Invalid boolean value")?;
    }
    Ok(())
}

fn parse_override<T: std::str::FromStr>(
    field: &str,
    value: String,
    reason: &str,
) -> VerifierResult<T> {
    value.trim().parse().map_err(|_| {
        ConfigurationError::InvalidValue {
            field: field.to_string(),
            value,
            reason: reason.to_string(),
        }
        .into()
    })
}

/// Builder pattern for creating configurations
pub struct ConfigBuilder {
    config: VerifierConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: VerifierConfig::default(),
        }
    }

    pub fn api(mut self, api: ApiConfig) -> Self {
        self.config.api = api;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    pub fn build(self) -> VerifierConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a sample configuration file
pub fn generate_sample_config(path: &str) -> VerifierResult<()> {
    ConfigLoader::new().save(&VerifierConfig::default(), path)
}
