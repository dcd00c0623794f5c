//! Request and response types.
//!
//! Upstream records follow the proto3 JSON mapping: fields arrive in
//! lowerCamelCase and zero values may be omitted entirely, so every record
//! deserializes with `#[serde(default)]`.

pub mod blockchain;
pub mod mpc_wallets;
pub mod pools;
pub mod proxy;

pub use blockchain::{Asset, AssetDefinition, GetAssetRequest};
pub use mpc_wallets::{
    Balance, BalanceDetail, ListBalanceDetailsRequest, ListBalanceDetailsResponse,
    ListBalancesRequest, ListBalancesResponse,
};
pub use pools::{ListPoolsRequest, ListPoolsResponse, Pool};
