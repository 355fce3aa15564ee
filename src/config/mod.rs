use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Failed to read config file '{path}': {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse config file '{path}': {source}")]
  Parse {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<String>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// Simulated store latency
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LatencyConfig {
  #[serde(default)]
  pub enabled: bool,
  #[serde(default = "default_min_ms")]
  pub min_ms: u64,
  #[serde(default = "default_max_ms")]
  pub max_ms: u64,
}

fn default_min_ms() -> u64 {
  150
}

fn default_max_ms() -> u64 {
  400
}

impl Default for LatencyConfig {
  fn default() -> Self {
    Self {
      enabled: false,
      min_ms: default_min_ms(),
      max_ms: default_max_ms(),
    }
  }
}

/// Site server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
  /// HTTP listening address
  #[serde(default = "default_server_addr")]
  pub server_addr: String,

  /// Directory whose JSON files replace the bundled fixtures
  #[serde(default)]
  pub fixtures_dir: Option<PathBuf>,

  #[serde(default)]
  pub latency: LatencyConfig,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_server_addr() -> String {
  "0.0.0.0:8080".to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: default_server_addr(),
      fixtures_dir: None,
      latency: LatencyConfig::default(),
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: &str) -> Result<Self, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_string(),
      source,
    })?;

    toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
      path: path.to_string(),
      source,
    })
  }
}
