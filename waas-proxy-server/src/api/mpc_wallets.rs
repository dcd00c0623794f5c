use axum::extract::State;
use axum::response::Response;
use kanau::processor::Processor;
use waas_proxy_core::processors::ListBalances;

use super::extractors::PathVars;
use super::{ApiError, json_ok};
use crate::state::AppState;

/// `GET /networks/{networkId}/addresses/{addressId}/balances`
///
/// Both captures are checked before any upstream call is made.
pub(crate) async fn list_balances(
    State(state): State<AppState>,
    vars: PathVars,
) -> Result<Response, ApiError> {
    let network_id = vars.require("networkId")?;
    let address_id = vars.require("addressId")?;

    let response = state
        .processor()
        .process(ListBalances {
            network_id: network_id.to_owned(),
            address_id: address_id.to_owned(),
        })
        .await
        .map_err(ApiError::Balances)?;

    json_ok(&response)
}
