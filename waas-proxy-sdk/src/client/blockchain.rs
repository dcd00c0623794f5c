//! Blockchain service client.

use reqwest::Client;
use url::Url;

use super::{ClientError, Endpoint, parse_response};
use crate::objects::blockchain::{Asset, GetAssetRequest};

/// Typed HTTP client for the WaaS **Blockchain service**.
#[derive(Debug, Clone)]
pub struct BlockchainClient {
    endpoint: Endpoint,
}

impl BlockchainClient {
    /// Create a new `BlockchainClient` rooted at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            endpoint: Endpoint::new(base_url),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.endpoint.http = client;
        self
    }

    /// Send `key` as a bearer credential on every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.endpoint.api_key = Some(key.into());
        self
    }

    /// `GET /v1/{name}` – look up an asset by resource name.
    pub async fn get_asset(&self, request: &GetAssetRequest) -> Result<Asset, ClientError> {
        let resp = self.endpoint.get(&request.name, None)?.send().await?;

        parse_response(resp).await
    }
}
