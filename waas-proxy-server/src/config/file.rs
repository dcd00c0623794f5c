//! TOML file configuration structures.
//!
//! These structs directly map to the `waas-proxy.toml` file format. Every
//! section is optional; an empty file runs the proxy against the public
//! WaaS endpoints on the default listen address.

use serde::Deserialize;
use std::net::SocketAddr;
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().expect("valid default address")
}

/// Upstream WaaS services section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_pool_url")]
    pub pool_url: Url,
    #[serde(default = "default_mpc_wallet_url")]
    pub mpc_wallet_url: Url,
    #[serde(default = "default_blockchain_url")]
    pub blockchain_url: Url,
    /// Page size requested from upstream list RPCs.
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout for a single upstream call.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            pool_url: default_pool_url(),
            mpc_wallet_url: default_mpc_wallet_url(),
            blockchain_url: default_blockchain_url(),
            page_size: None,
            connect_timeout_secs: None,
            request_timeout_secs: None,
        }
    }
}

const WAAS_API_ROOT: &str = "https://api.developer.coinbase.com/waas/";

fn default_service_url(service: &str) -> Url {
    Url::parse(WAAS_API_ROOT)
        .and_then(|root| root.join(service))
        .expect("valid default upstream url")
}

fn default_pool_url() -> Url {
    default_service_url("pools")
}

fn default_mpc_wallet_url() -> Url {
    default_service_url("mpc_wallets")
}

fn default_blockchain_url() -> Url {
    default_service_url("blockchain")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parsing() {
        let toml_str = r#"
[server]
listen = "127.0.0.1:3000"

[upstream]
pool_url = "http://localhost:9001/pools"
mpc_wallet_url = "http://localhost:9002/mpc_wallets"
blockchain_url = "http://localhost:9003/blockchain"
page_size = 50
connect_timeout_secs = 5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 3000);
        assert_eq!(config.upstream.pool_url.as_str(), "http://localhost:9001/pools");
        assert_eq!(config.upstream.page_size, Some(50));
        assert_eq!(config.upstream.connect_timeout_secs, Some(5));
        assert_eq!(config.upstream.request_timeout_secs, None);
    }

    #[test]
    fn test_empty_file_uses_public_endpoints() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.listen.port(), 8080);
        assert_eq!(
            config.upstream.pool_url.as_str(),
            "https://api.developer.coinbase.com/waas/pools"
        );
        assert_eq!(
            config.upstream.mpc_wallet_url.as_str(),
            "https://api.developer.coinbase.com/waas/mpc_wallets"
        );
        assert_eq!(
            config.upstream.blockchain_url.as_str(),
            "https://api.developer.coinbase.com/waas/blockchain"
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result: Result<FileConfig, _> = toml::from_str(
            r#"
[upstream]
pool_url = "not a url"
"#,
        );
        assert!(result.is_err());
    }
}
