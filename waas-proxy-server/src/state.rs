//! Application state shared across all request handlers.

use waas_proxy_core::framework::UpstreamProcessor;
use waas_proxy_core::upstream::WaasClients;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Upstream WaaS service handles. Read-only after startup.
    pub waas: WaasClients,
}

impl AppState {
    /// Create a new AppState around the upstream clients.
    pub fn new(waas: WaasClients) -> Self {
        Self { waas }
    }

    /// A processor for running one request pipeline.
    pub fn processor(&self) -> UpstreamProcessor {
        UpstreamProcessor {
            clients: self.waas.clone(),
        }
    }
}
