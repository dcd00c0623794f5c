//! Upstream WaaS service configuration.

use std::time::Duration;
use url::Url;

/// Where and how to reach the upstream WaaS services.
#[derive(Clone)]
pub struct UpstreamConfig {
    /// Base URL of the pool service.
    pub pool_url: Url,
    /// Base URL of the MPC wallet service.
    pub mpc_wallet_url: Url,
    /// Base URL of the blockchain service.
    pub blockchain_url: Url,
    /// Bearer credential sent to every service.
    pub api_key: Option<String>,
    /// Page size requested from list RPCs. `None` leaves it to the upstream.
    pub page_size: Option<u32>,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("pool_url", &self.pool_url.as_str())
            .field("mpc_wallet_url", &self.mpc_wallet_url.as_str())
            .field("blockchain_url", &self.blockchain_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("page_size", &self.page_size)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
