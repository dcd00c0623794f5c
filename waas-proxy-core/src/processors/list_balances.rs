//! Balance listing with per-balance enrichment.
//!
//! For every balance held at an address the pipeline looks up the asset's
//! display metadata and the balance's detail records, then flattens all
//! three upstream records into one [`proxy::Balance`].

use crate::framework::UpstreamProcessor;
use crate::upstream::drain;
use kanau::processor::Processor;
use thiserror::Error;
use tracing::{debug, warn};
use waas_proxy_sdk::client::ClientError;
use waas_proxy_sdk::objects::proxy::{self, ListBalancesResponse};
use waas_proxy_sdk::objects::{
    Asset, Balance, BalanceDetail, GetAssetRequest, ListBalanceDetailsRequest,
    ListBalancesRequest,
};

/// List the enriched balances held at `address_id` on `network_id`.
///
/// Drains all upstream pages; the caller gets no pagination.
#[derive(Debug, Clone)]
pub struct ListBalances {
    pub network_id: String,
    pub address_id: String,
}

/// Failures that abort the whole listing.
///
/// A failed asset lookup is not one of them: that balance is skipped.
#[derive(Debug, Error)]
pub enum ListBalancesError {
    #[error("cannot iterate balances: {0}")]
    Balances(#[source] ClientError),

    #[error("cannot iterate details of {balance}: {source}")]
    BalanceDetails {
        balance: String,
        #[source]
        source: ClientError,
    },
}

impl Processor<ListBalances> for UpstreamProcessor {
    type Output = ListBalancesResponse;
    type Error = ListBalancesError;
    #[tracing::instrument(
        skip_all,
        err,
        name = "WaaS:ListBalances",
        fields(network_id = %query.network_id, address_id = %query.address_id)
    )]
    async fn process(&self, query: ListBalances) -> Result<ListBalancesResponse, ListBalancesError> {
        let request = ListBalancesRequest::for_address(&query.network_id, &query.address_id);
        let balances = drain(self.clients.mpc_wallets.list_balances(request))
            .await
            .map_err(ListBalancesError::Balances)?;
        debug!(count = balances.len(), "balances listed");

        // TODO: switch to a batch asset lookup once the blockchain service exposes one
        let mut filled = Vec::with_capacity(balances.len());
        for balance in balances {
            let asset = match self
                .clients
                .blockchain
                .get_asset(GetAssetRequest {
                    name: balance.asset.clone(),
                })
                .await
            {
                Ok(asset) => asset,
                Err(e) => {
                    warn!(
                        error = %e,
                        balance = %balance.name,
                        asset = %balance.asset,
                        "cannot fetch asset details, skipping balance"
                    );
                    continue;
                }
            };

            let details = drain(self.clients.mpc_wallets.list_balance_details(
                ListBalanceDetailsRequest {
                    parent: balance.name.clone(),
                    ..Default::default()
                },
            ))
            .await
            .map_err(|source| ListBalancesError::BalanceDetails {
                balance: balance.name.clone(),
                source,
            })?;
            debug!(balance = %balance.name, count = details.len(), "balance details listed");

            filled.push(fill_balance(balance, asset, details.into_iter().next()));
        }

        Ok(ListBalancesResponse { balances: filled })
    }
}

/// Flatten a balance, its asset and its first detail record.
///
/// Without a first detail, or when it carries no asset definition, the
/// balance is kept and `definition` is left empty.
fn fill_balance(balance: Balance, asset: Asset, first_detail: Option<BalanceDetail>) -> proxy::Balance {
    let definition = first_detail.and_then(|detail| detail.asset_definition);
    if definition.is_none() {
        warn!(balance = %balance.name, "no asset definition in balance details");
    }

    proxy::Balance {
        name: balance.name,
        asset: balance.asset,
        amount: balance.amount,
        mpc_wallet: balance.mpc_wallet,
        symbol: asset.advertised_symbol,
        decimals: asset.decimals,
        definition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        FakeBlockchain, FakeMpcWallets, FakePools, FakeUpstream, asset, balance, detail,
    };
    use crate::upstream::{MockBlockchainService, WaasClients};
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use waas_proxy_sdk::objects::AssetDefinition;

    const ETH_BALANCE: &str = "networks/eth-mainnet/addresses/0xABC/balances/1";
    const USDC_BALANCE: &str = "networks/eth-mainnet/addresses/0xABC/balances/2";
    const ETH: &str = "networks/eth-mainnet/assets/ETH";
    const USDC: &str = "networks/eth-mainnet/assets/USDC";

    fn query() -> ListBalances {
        ListBalances {
            network_id: "eth-mainnet".to_string(),
            address_id: "0xABC".to_string(),
        }
    }

    fn processor(upstream: &FakeUpstream) -> UpstreamProcessor {
        UpstreamProcessor {
            clients: upstream.clients(),
        }
    }

    fn assets() -> FakeBlockchain {
        FakeBlockchain {
            assets: HashMap::from([
                (ETH.to_string(), asset(ETH, "ETH", 18)),
                (USDC.to_string(), asset(USDC, "USDC", 6)),
            ]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_single_native_balance() {
        let upstream = FakeUpstream::new(
            Default::default(),
            FakeMpcWallets {
                balances: vec![balance(
                    ETH_BALANCE,
                    ETH,
                    "1000000000000000000",
                    "pools/p1/mpcWallets/w1",
                )],
                details: HashMap::from([(ETH_BALANCE.to_string(), vec![detail("NATIVE")])]),
                ..Default::default()
            },
            assets(),
        );

        let response = processor(&upstream).process(query()).await.unwrap();

        assert_eq!(
            response.balances,
            vec![proxy::Balance {
                name: ETH_BALANCE.to_string(),
                asset: ETH.to_string(),
                amount: "1000000000000000000".to_string(),
                mpc_wallet: "pools/p1/mpcWallets/w1".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
                definition: Some(AssetDefinition::from("NATIVE")),
            }]
        );
        assert_eq!(
            upstream.mpc_wallets.balance_requests()[0].parent,
            "networks/eth-mainnet/addresses/0xABC"
        );
        assert_eq!(upstream.mpc_wallets.detail_requests()[0].parent, ETH_BALANCE);
        assert_eq!(upstream.blockchain.requests()[0].name, ETH);
    }

    #[tokio::test]
    async fn test_no_balances() {
        let upstream = FakeUpstream::new(Default::default(), Default::default(), assets());

        let response = processor(&upstream).process(query()).await.unwrap();

        assert!(response.balances.is_empty());
        assert!(upstream.blockchain.requests().is_empty());
        assert!(upstream.mpc_wallets.detail_requests().is_empty());
    }

    #[tokio::test]
    async fn test_failed_asset_lookup_skips_only_that_balance() {
        let upstream = FakeUpstream::new(
            Default::default(),
            FakeMpcWallets {
                balances: vec![
                    balance(ETH_BALANCE, ETH, "1", "pools/p1/mpcWallets/w1"),
                    balance(
                        "networks/eth-mainnet/addresses/0xABC/balances/9",
                        "networks/eth-mainnet/assets/UNKNOWN",
                        "2",
                        "pools/p1/mpcWallets/w1",
                    ),
                    balance(USDC_BALANCE, USDC, "3", "pools/p1/mpcWallets/w1"),
                ],
                details: HashMap::from([
                    (ETH_BALANCE.to_string(), vec![detail("NATIVE")]),
                    (USDC_BALANCE.to_string(), vec![detail("ERC20")]),
                ]),
                ..Default::default()
            },
            assets(),
        );

        let response = processor(&upstream).process(query()).await.unwrap();

        let names: Vec<_> = response.balances.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec![ETH_BALANCE, USDC_BALANCE]);
        assert_eq!(response.balances[1].symbol, "USDC");
        assert_eq!(response.balances[1].decimals, 6);
        // the skipped balance never reaches the detail listing
        let detail_parents: Vec<_> = upstream
            .mpc_wallets
            .detail_requests()
            .into_iter()
            .map(|r| r.parent)
            .collect();
        assert_eq!(detail_parents, vec![ETH_BALANCE, USDC_BALANCE]);
    }

    #[tokio::test]
    async fn test_no_details_leaves_definition_empty() {
        let upstream = FakeUpstream::new(
            Default::default(),
            FakeMpcWallets {
                balances: vec![balance(ETH_BALANCE, ETH, "5", "pools/p1/mpcWallets/w1")],
                ..Default::default()
            },
            assets(),
        );

        let response = processor(&upstream).process(query()).await.unwrap();

        assert_eq!(response.balances.len(), 1);
        assert_eq!(response.balances[0].definition, None);
        assert_eq!(response.balances[0].symbol, "ETH");
    }

    #[tokio::test]
    async fn test_definition_taken_from_first_detail() {
        let upstream = FakeUpstream::new(
            Default::default(),
            FakeMpcWallets {
                balances: vec![balance(USDC_BALANCE, USDC, "5", "pools/p1/mpcWallets/w1")],
                details: HashMap::from([(
                    USDC_BALANCE.to_string(),
                    vec![detail("ERC20"), detail("NATIVE")],
                )]),
                ..Default::default()
            },
            assets(),
        );

        let response = processor(&upstream).process(query()).await.unwrap();

        assert_eq!(
            response.balances[0].definition,
            Some(AssetDefinition::from("ERC20"))
        );
    }

    #[tokio::test]
    async fn test_asset_record_definition_not_used() {
        let mut blockchain = MockBlockchainService::new();
        blockchain
            .expect_get_asset()
            .withf(|request| request.name == ETH)
            .times(1)
            .returning(|_| {
                Ok(Asset {
                    definition: Some(AssetDefinition::from("ERC20")),
                    ..asset(ETH, "ETH", 18)
                })
            });
        let processor = UpstreamProcessor {
            clients: WaasClients::new(
                Arc::new(FakePools::default()),
                Arc::new(FakeMpcWallets {
                    balances: vec![balance(ETH_BALANCE, ETH, "5", "pools/p1/mpcWallets/w1")],
                    ..Default::default()
                }),
                Arc::new(blockchain),
            ),
        };

        let response = processor.process(query()).await.unwrap();

        assert_eq!(response.balances.len(), 1);
        assert_eq!(response.balances[0].definition, None);
    }

    #[tokio::test]
    async fn test_first_detail_without_definition() {
        let upstream = FakeUpstream::new(
            Default::default(),
            FakeMpcWallets {
                balances: vec![balance(USDC_BALANCE, USDC, "5", "pools/p1/mpcWallets/w1")],
                details: HashMap::from([(
                    USDC_BALANCE.to_string(),
                    vec![BalanceDetail::default(), detail("ERC20")],
                )]),
                ..Default::default()
            },
            assets(),
        );

        let response = processor(&upstream).process(query()).await.unwrap();

        assert_eq!(response.balances[0].definition, None);
    }

    #[tokio::test]
    async fn test_balance_cursor_error_aborts() {
        let upstream = FakeUpstream::new(
            Default::default(),
            FakeMpcWallets {
                balances: vec![balance(ETH_BALANCE, ETH, "1", "pools/p1/mpcWallets/w1")],
                balances_fail_at: Some(1),
                ..Default::default()
            },
            assets(),
        );

        let result = processor(&upstream).process(query()).await;

        assert!(matches!(result, Err(ListBalancesError::Balances(_))));
        assert!(upstream.blockchain.requests().is_empty());
    }

    #[tokio::test]
    async fn test_detail_cursor_error_aborts_whole_request() {
        let upstream = FakeUpstream::new(
            Default::default(),
            FakeMpcWallets {
                balances: vec![
                    balance(ETH_BALANCE, ETH, "1", "pools/p1/mpcWallets/w1"),
                    balance(USDC_BALANCE, USDC, "2", "pools/p1/mpcWallets/w1"),
                ],
                details: HashMap::from([(ETH_BALANCE.to_string(), vec![detail("NATIVE")])]),
                failing_details: HashSet::from([USDC_BALANCE.to_string()]),
                ..Default::default()
            },
            assets(),
        );

        let result = processor(&upstream).process(query()).await;

        match result {
            Err(ListBalancesError::BalanceDetails { balance, .. }) => {
                assert_eq!(balance, USDC_BALANCE)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fields_carried_through_verbatim() {
        let raw = balance(
            "networks/solana-mainnet/addresses/Ab%2F/balances/x y",
            ETH,
            "000120",
            "pools/p 1/mpcWallets/w1",
        );
        let upstream = FakeUpstream::new(
            Default::default(),
            FakeMpcWallets {
                balances: vec![raw.clone()],
                ..Default::default()
            },
            assets(),
        );

        let response = processor(&upstream).process(query()).await.unwrap();

        let out = &response.balances[0];
        assert_eq!(out.name, raw.name);
        assert_eq!(out.asset, raw.asset);
        assert_eq!(out.amount, raw.amount);
        assert_eq!(out.mpc_wallet, raw.mpc_wallet);
    }
}
