//! Response bodies served by the proxy itself.

use serde::{Deserialize, Serialize};

use super::blockchain::AssetDefinition;
use super::pools::Pool;

/// A balance enriched with display metadata from the blockchain service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Format: networks/{network_id}/addresses/{address_id}/balances/{balance_id}
    pub name: String,
    /// Format: networks/{network}/assets/{asset}
    pub asset: String,
    /// Atomic units, base-10, exactly as reported upstream.
    pub amount: String,
    /// Format: pools/{pool}/mpcWallets/{mpcWallet}
    pub mpc_wallet: String,
    pub symbol: String,
    pub decimals: i32,
    /// Taken from the first balance detail. Absent when there was none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<AssetDefinition>,
}

/// `GET /v1/networks/{networkId}/addresses/{addressId}/balances`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBalancesResponse {
    pub balances: Vec<Balance>,
}

/// `GET /v1/pools`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPoolsResponse {
    pub pools: Vec<Pool>,
}
