use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordEntry;
use super::server::ServerConfig;

/// Main configuration structure for Basalt DNS.
///
/// `default_ttl` and `records` sit at the top level, matching the zone
/// file layout this server has always consumed; `server` and `logging`
/// are optional sections with full defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Applied to records without an explicit TTL.
    #[serde(default = "default_ttl")]
    pub default_ttl: i64,

    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            default_ttl: default_ttl(),
            records: Vec::new(),
        }
    }
}

fn default_ttl() -> i64 {
    300
}

impl Config {
    /// Load configuration from a YAML file and apply CLI overrides.
    pub fn load(path: &str, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_ttl < 0 {
            return Err(ConfigError::NegativeTtl(self.default_ttl));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}
