use axum::extract::State;
use axum::response::Response;
use kanau::processor::Processor;
use waas_proxy_core::processors::ListPools;

use super::{ApiError, json_ok};
use crate::state::AppState;

/// `GET /pools` – every pool, in upstream order.
pub(crate) async fn list_pools(State(state): State<AppState>) -> Result<Response, ApiError> {
    let response = state
        .processor()
        .process(ListPools)
        .await
        .map_err(ApiError::Pools)?;

    json_ok(&response)
}
