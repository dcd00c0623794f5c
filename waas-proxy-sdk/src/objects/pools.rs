//! Pool service records.

use serde::{Deserialize, Serialize};

/// An upstream grouping resource for MPC keys and wallets.
///
/// The proxy treats pools as opaque and forwards them as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "camelCase"))]
pub struct Pool {
    /// The resource name of the Pool.
    /// Format: pools/{pool_id}
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// A user-chosen display name for the Pool.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,
}

/// `ListPools` parameters. Serialized as the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPoolsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// One page of `ListPools`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListPoolsResponse {
    pub pools: Vec<Pool>,
    pub next_page_token: Option<String>,
}
