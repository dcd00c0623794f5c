//! Proxy API handlers.
//!
//! # Endpoints
//!
//! - `GET /pools`                                           – list every pool
//! - `GET /networks/{networkId}/addresses/{addressId}/balances` – list enriched balances
//!
//! Both endpoints drain every upstream page and answer with the full set.

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use waas_proxy_core::processors::ListBalancesError;
use waas_proxy_sdk::client::ClientError;

use crate::state::AppState;

mod extractors;
mod mpc_wallets;
mod pools;

/// Build the proxy API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pools", get(pools::list_pools))
        .route(
            "/networks/{networkId}/addresses/{addressId}/balances",
            get(mpc_wallets::list_balances),
        )
}

// ---------------------------------------------------------------------------
// Shared error type
// ---------------------------------------------------------------------------

/// Errors that can occur in API handlers.
///
/// Upstream detail is logged, never returned to the caller.
#[derive(Debug)]
pub(crate) enum ApiError {
    MissingPathVar(&'static str),
    InvalidPathVar(&'static str),
    Pools(ClientError),
    Balances(ListBalancesError),
    Serialization(serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingPathVar(name) => {
                tracing::debug!(path_var = name, "Rejecting request with missing path variable");
                (
                    StatusCode::BAD_REQUEST,
                    format!("bad request: missing path variable {name}"),
                )
                    .into_response()
            }
            ApiError::InvalidPathVar(name) => {
                tracing::debug!(path_var = name, "Rejecting path variable containing '/'");
                (
                    StatusCode::BAD_REQUEST,
                    format!("bad request: invalid path variable {name}"),
                )
                    .into_response()
            }
            ApiError::Pools(e) => {
                tracing::error!(error = %e, "Cannot list pools");
                bad_gateway()
            }
            ApiError::Balances(e) => {
                tracing::error!(error = %e, "Cannot list balances");
                bad_gateway()
            }
            ApiError::Serialization(e) => {
                tracing::error!(error = %e, "Cannot serialize response");
                bad_gateway()
            }
        }
    }
}

fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "bad gateway").into_response()
}

/// Serialize `body` up front so a failure still maps to a status code.
pub(crate) fn json_ok<T: Serialize>(body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body).map_err(ApiError::Serialization)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        bytes,
    )
        .into_response())
}
