//! Configuration types for the WaaS proxy.
//!
//! These types represent the validated runtime configuration. The actual
//! config loading/parsing is handled by the server crate.

mod server;
mod upstream;

pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
