//! In-memory fakes of the upstream services.
//!
//! Each fake records the requests it receives so tests can assert which
//! upstream calls a pipeline made.

use crate::upstream::{
    BlockchainService, BoxCursor, IterCursor, MpcWalletService, PoolService, WaasClients,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};
use waas_proxy_sdk::client::ClientError;
use waas_proxy_sdk::objects::{
    Asset, Balance, BalanceDetail, GetAssetRequest, ListBalanceDetailsRequest,
    ListBalancesRequest, ListPoolsRequest, Pool,
};

/// An upstream failure as the HTTP clients would report it.
pub fn upstream_failure(body: &str) -> ClientError {
    ClientError::Api {
        status: StatusCode::SERVICE_UNAVAILABLE,
        body: body.to_owned(),
    }
}

/// Yield `items`, failing in place of the item at `fail_at`.
fn scripted<T: Clone + Send + 'static>(items: &[T], fail_at: Option<usize>) -> BoxCursor<T> {
    let results = items.iter().enumerate().map(|(index, item)| {
        if fail_at == Some(index) {
            Err(upstream_failure("cursor failed"))
        } else {
            Ok(item.clone())
        }
    });
    let results: Vec<_> = match fail_at {
        Some(index) if index >= items.len() => results
            .chain(std::iter::once(Err(upstream_failure("cursor failed"))))
            .collect(),
        _ => results.collect(),
    };
    Box::new(IterCursor::new(results))
}

fn record<T>(log: &Mutex<Vec<T>>, entry: T) {
    log.lock().unwrap_or_else(PoisonError::into_inner).push(entry);
}

fn snapshot<T: Clone>(log: &Mutex<Vec<T>>) -> Vec<T> {
    log.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

#[derive(Default)]
pub struct FakePools {
    pub pools: Vec<Pool>,
    /// Fail the cursor at this position instead of yielding a pool.
    pub fail_at: Option<usize>,
    pub received: Mutex<Vec<ListPoolsRequest>>,
}

impl FakePools {
    pub fn requests(&self) -> Vec<ListPoolsRequest> {
        snapshot(&self.received)
    }
}

impl PoolService for FakePools {
    fn list_pools(&self, request: ListPoolsRequest) -> BoxCursor<Pool> {
        record(&self.received, request);
        scripted(&self.pools, self.fail_at)
    }
}

#[derive(Default)]
pub struct FakeMpcWallets {
    pub balances: Vec<Balance>,
    /// Fail the balance cursor at this position instead of yielding a balance.
    pub balances_fail_at: Option<usize>,
    /// Detail records keyed by balance name. Unknown balances have none.
    pub details: HashMap<String, Vec<BalanceDetail>>,
    /// Balance names whose detail cursor fails immediately.
    pub failing_details: HashSet<String>,
    pub received_balances: Mutex<Vec<ListBalancesRequest>>,
    pub received_details: Mutex<Vec<ListBalanceDetailsRequest>>,
}

impl FakeMpcWallets {
    pub fn balance_requests(&self) -> Vec<ListBalancesRequest> {
        snapshot(&self.received_balances)
    }

    pub fn detail_requests(&self) -> Vec<ListBalanceDetailsRequest> {
        snapshot(&self.received_details)
    }
}

impl MpcWalletService for FakeMpcWallets {
    fn list_balances(&self, request: ListBalancesRequest) -> BoxCursor<Balance> {
        record(&self.received_balances, request);
        scripted(&self.balances, self.balances_fail_at)
    }

    fn list_balance_details(
        &self,
        request: ListBalanceDetailsRequest,
    ) -> BoxCursor<BalanceDetail> {
        let parent = request.parent.clone();
        record(&self.received_details, request);
        if self.failing_details.contains(&parent) {
            return scripted::<BalanceDetail>(&[], Some(0));
        }
        let details = self.details.get(&parent).map(Vec::as_slice).unwrap_or_default();
        scripted(details, None)
    }
}

#[derive(Default)]
pub struct FakeBlockchain {
    /// Assets keyed by resource name. Lookups of anything else fail.
    pub assets: HashMap<String, Asset>,
    pub received: Mutex<Vec<GetAssetRequest>>,
}

impl FakeBlockchain {
    pub fn requests(&self) -> Vec<GetAssetRequest> {
        snapshot(&self.received)
    }
}

#[async_trait]
impl BlockchainService for FakeBlockchain {
    async fn get_asset(&self, request: GetAssetRequest) -> Result<Asset, ClientError> {
        let asset = self.assets.get(&request.name).cloned();
        let name = request.name.clone();
        record(&self.received, request);
        asset.ok_or_else(|| ClientError::Api {
            status: StatusCode::NOT_FOUND,
            body: format!("asset {name} not found"),
        })
    }
}

/// All three fakes, kept behind `Arc`s so tests can inspect them after
/// handing [`FakeUpstream::clients`] to a pipeline.
#[derive(Clone, Default)]
pub struct FakeUpstream {
    pub pools: Arc<FakePools>,
    pub mpc_wallets: Arc<FakeMpcWallets>,
    pub blockchain: Arc<FakeBlockchain>,
}

impl FakeUpstream {
    pub fn new(pools: FakePools, mpc_wallets: FakeMpcWallets, blockchain: FakeBlockchain) -> Self {
        Self {
            pools: Arc::new(pools),
            mpc_wallets: Arc::new(mpc_wallets),
            blockchain: Arc::new(blockchain),
        }
    }

    pub fn clients(&self) -> WaasClients {
        WaasClients::new(
            self.pools.clone(),
            self.mpc_wallets.clone(),
            self.blockchain.clone(),
        )
    }

    /// Number of upstream calls made across all three services.
    pub fn call_count(&self) -> usize {
        self.pools.requests().len()
            + self.mpc_wallets.balance_requests().len()
            + self.mpc_wallets.detail_requests().len()
            + self.blockchain.requests().len()
    }
}

/// An upstream balance record.
pub fn balance(name: &str, asset: &str, amount: &str, mpc_wallet: &str) -> Balance {
    Balance {
        name: name.to_owned(),
        asset: asset.to_owned(),
        amount: amount.to_owned(),
        mpc_wallet: mpc_wallet.to_owned(),
    }
}

/// An upstream asset record.
pub fn asset(name: &str, symbol: &str, decimals: i32) -> Asset {
    Asset {
        name: name.to_owned(),
        advertised_symbol: symbol.to_owned(),
        decimals,
        definition: None,
    }
}

/// A balance detail carrying `definition`.
pub fn detail(definition: &str) -> BalanceDetail {
    BalanceDetail {
        asset_definition: Some(definition.into()),
    }
}
