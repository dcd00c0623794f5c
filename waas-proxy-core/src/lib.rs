#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod config;
pub mod framework;
pub mod processors;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
pub mod upstream;
