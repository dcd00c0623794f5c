//! Pool service client.

use reqwest::Client;
use url::Url;

use super::{ClientError, Endpoint, parse_response};
use crate::objects::pools::{ListPoolsRequest, ListPoolsResponse};

/// Typed HTTP client for the WaaS **Pool service**.
#[derive(Debug, Clone)]
pub struct PoolClient {
    endpoint: Endpoint,
}

impl PoolClient {
    /// Create a new `PoolClient` rooted at `base_url`.
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

    /// Page size sent on list requests that do not set their own.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.endpoint.page_size = Some(page_size);
        self
    }

    /// `GET /v1/pools` – fetch one page of pools.
    pub async fn list_pools(
        &self,
        request: &ListPoolsRequest,
    ) -> Result<ListPoolsResponse, ClientError> {
        let resp = self
            .endpoint
            .list("pools", None, request, request.page_size)?
            .send()
            .await?;

        parse_response(resp).await
    }
}
