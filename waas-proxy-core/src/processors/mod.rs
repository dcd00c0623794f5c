//! Request pipelines.
//!
//! Each pipeline is an input type processed by
//! [`UpstreamProcessor`](crate::framework::UpstreamProcessor). Pipelines run
//! strictly sequentially: one upstream call at a time, in record order.

pub mod list_balances;
pub mod list_pools;

pub use list_balances::{ListBalances, ListBalancesError};
pub use list_pools::ListPools;
