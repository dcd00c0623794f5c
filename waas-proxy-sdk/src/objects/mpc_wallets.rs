//! MPC wallet service records.

use serde::{Deserialize, Serialize};

use super::blockchain::AssetDefinition;

/// A holding of one asset at one address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "camelCase"))]
pub struct Balance {
    /// The resource name of the Balance.
    /// Format: networks/{network_id}/addresses/{address_id}/balances/{balance_id}
    pub name: String,
    /// The resource name of the Asset to which this Balance corresponds.
    /// Format: networks/{network}/assets/{asset}
    pub asset: String,
    /// The amount of the Asset, denominated in atomic units of the asset
    /// (e.g., Wei for Ether), as a base-10 number.
    pub amount: String,
    /// The resource name of the MPCWallet to which this Balance belongs.
    /// Format: pools/{pool}/mpcWallets/{mpcWallet}
    pub mpc_wallet: String,
}

/// A breakdown record of a [`Balance`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "camelCase"))]
pub struct BalanceDetail {
    pub asset_definition: Option<AssetDefinition>,
}

/// `ListBalances` parameters.
///
/// `parent` is part of the request path; only the paging fields end up in
/// the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListBalancesRequest {
    /// Format: networks/{network_id}/addresses/{address_id}
    #[serde(skip_serializing)]
    pub parent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl ListBalancesRequest {
    /// Scope a request to the balances held at `address_id` on `network_id`.
    pub fn for_address(network_id: &str, address_id: &str) -> Self {
        Self {
            parent: format!("networks/{network_id}/addresses/{address_id}"),
            ..Default::default()
        }
    }
}

/// One page of `ListBalances`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBalancesResponse {
    pub balances: Vec<Balance>,
    pub next_page_token: Option<String>,
}

/// `ListBalanceDetails` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListBalanceDetailsRequest {
    /// Format: networks/{network_id}/addresses/{address_id}/balances/{balance_id}
    #[serde(skip_serializing)]
    pub parent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// One page of `ListBalanceDetails`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBalanceDetailsResponse {
    pub balance_details: Vec<BalanceDetail>,
    pub next_page_token: Option<String>,
}
