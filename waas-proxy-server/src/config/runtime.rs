//! Runtime configuration re-exports.
//!
//! The validated config types are defined in `waas-proxy-core::config`.

pub use waas_proxy_core::config::{ServerConfig, UpstreamConfig};
