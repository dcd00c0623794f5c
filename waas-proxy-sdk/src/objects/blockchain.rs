//! Blockchain service records.

use serde::{Deserialize, Serialize};

/// The upstream classification of an asset's on-chain representation,
/// e.g. `NATIVE` or `ERC20`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetDefinition(pub String);

impl AssetDefinition {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetDefinition {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Display metadata for an asset on a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "camelCase"))]
pub struct Asset {
    /// Format: networks/{network}/assets/{asset}
    pub name: String,
    /// The symbol the asset is commonly listed under, e.g. `ETH`.
    pub advertised_symbol: String,
    /// Number of decimal places between the atomic unit and the display unit.
    pub decimals: i32,
    /// Not read by the proxy: output takes the definition from the
    /// balance's first detail record.
    pub definition: Option<AssetDefinition>,
}

/// `GetAsset` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAssetRequest {
    /// Format: networks/{network}/assets/{asset}
    pub name: String,
}
