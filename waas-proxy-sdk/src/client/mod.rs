//! HTTP clients for the upstream WaaS services.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.
//!
//! Each service lives behind its own base URL. The clients speak the JSON
//! transcoding of the WaaS RPCs: resource names become path segments and
//! paging parameters travel in the query string.

mod blockchain;
mod mpc_wallets;
mod pools;

pub use blockchain::BlockchainClient;
pub use mpc_wallets::MpcWalletClient;
pub use pools::PoolClient;

use reqwest::{Client, RequestBuilder, StatusCode};
use url::Url;

/// Errors produced by the upstream HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A list RPC handed back the page token it was just called with.
    #[error("upstream repeated page token {0:?}")]
    RepeatedPageToken(String),

    /// The configured base URL cannot carry path segments (e.g. `mailto:`).
    #[error("base url cannot carry a path: {0}")]
    CannotBeABase(Url),
}

/// Connection settings shared by every request a client makes.
#[derive(Debug, Clone)]
struct Endpoint {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    page_size: Option<u32>,
}

impl Endpoint {
    fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key: None,
            page_size: None,
        }
    }

    /// Build a `GET` for `{base_url}/v1/{resource}[/{collection}]`.
    ///
    /// Resource names are split on `/` and every segment is percent-encoded.
    /// Callers must keep `/` out of the identifiers they format into a name.
    fn get(&self, resource: &str, collection: Option<&str>) -> Result<RequestBuilder, ClientError> {
        let url = resource_url(&self.base_url, resource, collection)?;
        let request = self.http.get(url);
        Ok(match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        })
    }

    /// Build a paged `GET` carrying `query`, falling back to the client's
    /// default page size when the request does not set one.
    fn list<Q: serde::Serialize>(
        &self,
        resource: &str,
        collection: Option<&str>,
        query: &Q,
        page_size: Option<u32>,
    ) -> Result<RequestBuilder, ClientError> {
        let request = self.get(resource, collection)?.query(query);
        Ok(match (page_size, self.page_size) {
            (None, Some(default)) => request.query(&[("page_size", default)]),
            _ => request,
        })
    }
}

fn resource_url(base_url: &Url, resource: &str, collection: Option<&str>) -> Result<Url, ClientError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| ClientError::CannotBeABase(base_url.clone()))?
        .pop_if_empty()
        .push("v1")
        .extend(resource.split('/'))
        .extend(collection);
    Ok(url)
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
