use crate::framework::UpstreamProcessor;
use crate::upstream::drain;
use kanau::processor::Processor;
use tracing::debug;
use waas_proxy_sdk::client::ClientError;
use waas_proxy_sdk::objects::ListPoolsRequest;
use waas_proxy_sdk::objects::proxy::ListPoolsResponse;

/// List every pool, unfiltered.
///
/// Drains all upstream pages; the caller gets no pagination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPools;

impl Processor<ListPools> for UpstreamProcessor {
    type Output = ListPoolsResponse;
    type Error = ClientError;
    #[tracing::instrument(skip_all, err, name = "WaaS:ListPools")]
    async fn process(&self, _query: ListPools) -> Result<ListPoolsResponse, ClientError> {
        let request = ListPoolsRequest::default();
        debug!(?request, "ListPools request");

        let pools = drain(self.clients.pools.list_pools(request)).await?;

        debug!(count = pools.len(), "ListPools response");
        Ok(ListPoolsResponse { pools })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakePools, FakeUpstream};
    use waas_proxy_sdk::objects::Pool;

    fn pool(name: &str) -> Pool {
        Pool {
            name: name.to_string(),
            display_name: format!("{name} display"),
        }
    }

    fn processor(upstream: &FakeUpstream) -> UpstreamProcessor {
        UpstreamProcessor {
            clients: upstream.clients(),
        }
    }

    #[tokio::test]
    async fn test_pools_keep_upstream_order() {
        let pools = vec![pool("pools/c"), pool("pools/a"), pool("pools/c"), pool("pools/b")];
        let upstream = FakeUpstream::new(
            FakePools {
                pools: pools.clone(),
                ..Default::default()
            },
            Default::default(),
            Default::default(),
        );

        let response = processor(&upstream).process(ListPools).await.unwrap();

        assert_eq!(response.pools, pools);
        assert_eq!(upstream.pools.requests(), vec![ListPoolsRequest::default()]);
    }

    #[tokio::test]
    async fn test_no_pools() {
        let upstream = FakeUpstream::default();

        let response = processor(&upstream).process(ListPools).await.unwrap();

        assert!(response.pools.is_empty());
    }

    #[tokio::test]
    async fn test_enumeration_error_discards_partial_results() {
        let upstream = FakeUpstream::new(
            FakePools {
                pools: vec![pool("pools/a"), pool("pools/b")],
                fail_at: Some(1),
                ..Default::default()
            },
            Default::default(),
            Default::default(),
        );

        let result = processor(&upstream).process(ListPools).await;

        assert!(matches!(result, Err(ClientError::Api { .. })));
    }
}
