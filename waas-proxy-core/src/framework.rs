use crate::upstream::WaasClients;

/// Runs request pipelines against the upstream WaaS services.
///
/// Cheap to build per request; the client handles are shared.
pub struct UpstreamProcessor {
    pub clients: WaasClients,
}
