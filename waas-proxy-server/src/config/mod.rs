//! Configuration module for waas-proxy-server.
//!
//! Handles loading configuration from TOML files, CLI arguments,
//! and environment variables.

pub mod file;
pub mod runtime;

use crate::config::file::FileConfig;
use crate::config::runtime::{ServerConfig, UpstreamConfig};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the upstream bearer credential.
pub const API_KEY_ENV: &str = "WAAS_API_KEY";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    /// 4. Pick up the API key from the environment
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let file_config: FileConfig = toml::from_str(&config_content)?;

        self.build(file_config, get_api_key())
    }

    fn build(
        &self,
        mut file_config: FileConfig,
        api_key: Option<String>,
    ) -> Result<LoadedConfig, ConfigError> {
        // Apply CLI overrides
        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        validate(&file_config)?;

        let upstream = file_config.upstream;
        Ok(LoadedConfig {
            server: ServerConfig {
                listen: file_config.server.listen,
            },
            upstream: UpstreamConfig {
                pool_url: upstream.pool_url,
                mpc_wallet_url: upstream.mpc_wallet_url,
                blockchain_url: upstream.blockchain_url,
                api_key,
                page_size: upstream.page_size,
                connect_timeout: upstream.connect_timeout_secs.map(Duration::from_secs),
                request_timeout: upstream.request_timeout_secs.map(Duration::from_secs),
            },
        })
    }
}

fn validate(config: &FileConfig) -> Result<(), ConfigError> {
    let upstream = &config.upstream;
    if upstream.page_size == Some(0) {
        return Err(ConfigError::ValidationError(
            "upstream.page_size must be greater than zero".to_string(),
        ));
    }
    if upstream.connect_timeout_secs == Some(0) || upstream.request_timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "upstream timeouts must be greater than zero".to_string(),
        ));
    }
    for (key, url) in [
        ("pool_url", &upstream.pool_url),
        ("mpc_wallet_url", &upstream.mpc_wallet_url),
        ("blockchain_url", &upstream.blockchain_url),
    ] {
        if url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError(format!(
                "upstream.{key} must be a hierarchical url, got {url}"
            )));
        }
    }
    Ok(())
}

/// Get the upstream API key from the environment, if set.
pub fn get_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}
