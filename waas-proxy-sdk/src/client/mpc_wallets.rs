//! MPC wallet service client.

use reqwest::Client;
use url::Url;

use super::{ClientError, Endpoint, parse_response};
use crate::objects::mpc_wallets::{
    ListBalanceDetailsRequest, ListBalanceDetailsResponse, ListBalancesRequest,
    ListBalancesResponse,
};

/// Typed HTTP client for the WaaS **MPC wallet service**.
#[derive(Debug, Clone)]
pub struct MpcWalletClient {
    endpoint: Endpoint,
}

impl MpcWalletClient {
    /// Create a new `MpcWalletClient` rooted at `base_url`.
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

    /// `GET /v1/{parent}/balances` – fetch one page of balances held at an
    /// address.
    pub async fn list_balances(
        &self,
        request: &ListBalancesRequest,
    ) -> Result<ListBalancesResponse, ClientError> {
        let resp = self
            .endpoint
            .list(&request.parent, Some("balances"), request, request.page_size)?
            .send()
            .await?;

        parse_response(resp).await
    }

    /// `GET /v1/{parent}/balanceDetails` – fetch one page of detail records
    /// for a balance.
    pub async fn list_balance_details(
        &self,
        request: &ListBalanceDetailsRequest,
    ) -> Result<ListBalanceDetailsResponse, ClientError> {
        let resp = self
            .endpoint
            .list(&request.parent, Some("balanceDetails"), request, request.page_size)?
            .send()
            .await?;

        parse_response(resp).await
    }
}
