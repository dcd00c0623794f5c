//! The upstream WaaS services, as seen by the request pipelines.
//!
//! Each service is a trait so that pipelines can be exercised against
//! fakes. The production implementations wrap the `reqwest` clients from
//! `waas_proxy_sdk::client`.

pub mod cursor;

pub use cursor::{BoxCursor, Cursor, IterCursor, Page, PageSource, PagedCursor, drain};

use crate::config::UpstreamConfig;
use async_trait::async_trait;
use std::sync::Arc;
use waas_proxy_sdk::client::{BlockchainClient, ClientError, MpcWalletClient, PoolClient};
use waas_proxy_sdk::objects::{
    Asset, Balance, BalanceDetail, GetAssetRequest, ListBalanceDetailsRequest,
    ListBalancesRequest, ListPoolsRequest, Pool,
};

/// Pool management.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait PoolService: Send + Sync {
    fn list_pools(&self, request: ListPoolsRequest) -> BoxCursor<Pool>;
}

/// MPC wallet balances.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait MpcWalletService: Send + Sync {
    fn list_balances(&self, request: ListBalancesRequest) -> BoxCursor<Balance>;

    fn list_balance_details(
        &self,
        request: ListBalanceDetailsRequest,
    ) -> BoxCursor<BalanceDetail>;
}

/// Blockchain asset metadata.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait BlockchainService: Send + Sync {
    async fn get_asset(&self, request: GetAssetRequest) -> Result<Asset, ClientError>;
}

/// Handles to the three upstream services.
///
/// Built once at startup and shared read-only by every request; cloning
/// only bumps reference counts.
#[derive(Clone)]
pub struct WaasClients {
    pub pools: Arc<dyn PoolService>,
    pub mpc_wallets: Arc<dyn MpcWalletService>,
    pub blockchain: Arc<dyn BlockchainService>,
}

impl WaasClients {
    pub fn new(
        pools: Arc<dyn PoolService>,
        mpc_wallets: Arc<dyn MpcWalletService>,
        blockchain: Arc<dyn BlockchainService>,
    ) -> Self {
        Self {
            pools,
            mpc_wallets,
            blockchain,
        }
    }

    /// Build HTTP clients for every service from the runtime configuration.
    ///
    /// All three share one connection pool.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("waas-proxy/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let mut pools = PoolClient::new(config.pool_url.clone()).with_http_client(http.clone());
        let mut mpc_wallets =
            MpcWalletClient::new(config.mpc_wallet_url.clone()).with_http_client(http.clone());
        let mut blockchain =
            BlockchainClient::new(config.blockchain_url.clone()).with_http_client(http);

        if let Some(key) = &config.api_key {
            pools = pools.with_api_key(key.clone());
            mpc_wallets = mpc_wallets.with_api_key(key.clone());
            blockchain = blockchain.with_api_key(key.clone());
        }
        if let Some(size) = config.page_size {
            pools = pools.with_page_size(size);
            mpc_wallets = mpc_wallets.with_page_size(size);
        }

        Ok(Self::new(
            Arc::new(pools),
            Arc::new(mpc_wallets),
            Arc::new(blockchain),
        ))
    }
}

// -- reqwest-backed implementations -------------------------------------

struct PoolPages {
    client: PoolClient,
    request: ListPoolsRequest,
}

#[async_trait]
impl PageSource for PoolPages {
    type Item = Pool;

    async fn fetch(&self, page_token: Option<String>) -> Result<Page<Pool>, ClientError> {
        let request = ListPoolsRequest {
            page_token,
            ..self.request.clone()
        };
        let page = self.client.list_pools(&request).await?;
        Ok(Page {
            items: page.pools,
            next_page_token: page.next_page_token,
        })
    }
}

impl PoolService for PoolClient {
    fn list_pools(&self, request: ListPoolsRequest) -> BoxCursor<Pool> {
        Box::new(PagedCursor::new(PoolPages {
            client: self.clone(),
            request,
        }))
    }
}

struct BalancePages {
    client: MpcWalletClient,
    request: ListBalancesRequest,
}

#[async_trait]
impl PageSource for BalancePages {
    type Item = Balance;

    async fn fetch(&self, page_token: Option<String>) -> Result<Page<Balance>, ClientError> {
        let request = ListBalancesRequest {
            page_token,
            ..self.request.clone()
        };
        let page = self.client.list_balances(&request).await?;
        Ok(Page {
            items: page.balances,
            next_page_token: page.next_page_token,
        })
    }
}

struct BalanceDetailPages {
    client: MpcWalletClient,
    request: ListBalanceDetailsRequest,
}

#[async_trait]
impl PageSource for BalanceDetailPages {
    type Item = BalanceDetail;

    async fn fetch(&self, page_token: Option<String>) -> Result<Page<BalanceDetail>, ClientError> {
        let request = ListBalanceDetailsRequest {
            page_token,
            ..self.request.clone()
        };
        let page = self.client.list_balance_details(&request).await?;
        Ok(Page {
            items: page.balance_details,
            next_page_token: page.next_page_token,
        })
    }
}

impl MpcWalletService for MpcWalletClient {
    fn list_balances(&self, request: ListBalancesRequest) -> BoxCursor<Balance> {
        Box::new(PagedCursor::new(BalancePages {
            client: self.clone(),
            request,
        }))
    }

    fn list_balance_details(
        &self,
        request: ListBalanceDetailsRequest,
    ) -> BoxCursor<BalanceDetail> {
        Box::new(PagedCursor::new(BalanceDetailPages {
            client: self.clone(),
            request,
        }))
    }
}

#[async_trait]
impl BlockchainService for BlockchainClient {
    async fn get_asset(&self, request: GetAssetRequest) -> Result<Asset, ClientError> {
        BlockchainClient::get_asset(self, &request).await
    }
}
