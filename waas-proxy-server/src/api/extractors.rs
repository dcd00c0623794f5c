//! Custom Axum extractors.
//!
//! Provides `PathVars`, a lenient view of the matched path captures. Unlike
//! `Path<T>` it never rejects: handlers decide which captures they require
//! and turn absent or blank ones into [`ApiError::MissingPathVar`].
//!
//! Captures are percent-decoded, so `%2F` arrives as `/`. A decoded `/`
//! would split one identifier into several upstream resource segments and
//! is rejected with [`ApiError::InvalidPathVar`].

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, RawPathParams};
use axum::http::request::Parts;

use crate::api::ApiError;

/// Percent-decoded path captures keyed by their route name.
#[derive(Debug, Clone, Default)]
pub(crate) struct PathVars(HashMap<String, String>);

impl PathVars {
    /// The value of capture `name`, exactly as decoded.
    ///
    /// Whitespace only counts toward the blank check; the value itself is
    /// forwarded untouched.
    pub(crate) fn require(&self, name: &'static str) -> Result<&str, ApiError> {
        let value = self
            .0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ApiError::MissingPathVar(name))?;
        if value.contains('/') {
            return Err(ApiError::InvalidPathVar(name));
        }
        Ok(value)
    }
}

impl<S> FromRequestParts<S> for PathVars
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let vars = match RawPathParams::from_request_parts(parts, state).await {
            Ok(params) => params
                .iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "path captures unavailable");
                HashMap::new()
            }
        };
        Ok(PathVars(vars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> PathVars {
        PathVars(
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_require_keeps_surrounding_whitespace() {
        let vars = vars(&[("networkId", " eth-mainnet ")]);

        assert_eq!(vars.require("networkId").unwrap(), " eth-mainnet ");
    }

    #[test]
    fn test_require_rejects_blank_and_absent() {
        let vars = vars(&[("networkId", " \t")]);

        assert!(matches!(
            vars.require("networkId"),
            Err(ApiError::MissingPathVar("networkId"))
        ));
        assert!(matches!(
            vars.require("addressId"),
            Err(ApiError::MissingPathVar("addressId"))
        ));
    }

    #[test]
    fn test_require_rejects_decoded_slash() {
        let vars = vars(&[("addressId", "0xABC/balances/1")]);

        assert!(matches!(
            vars.require("addressId"),
            Err(ApiError::InvalidPathVar("addressId"))
        ));
    }
}
