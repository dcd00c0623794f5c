//! Wire types and typed HTTP clients for the WaaS proxy.
//!
//! [`objects`] holds both the upstream WaaS records (proto3 JSON, camelCase)
//! and the proxy's own response bodies. The `client` feature adds
//! `reqwest`-based clients for the pool, MPC wallet and blockchain services.

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
