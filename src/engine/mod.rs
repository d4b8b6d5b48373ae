//! The pool engine: quote and execute paths over the ledger registry.
//!
//! | Operation | Quote | Execute |
//! |-----------|-------|---------|
//! | Same-asset withdrawal | [`quote_potential_withdraw`](PoolEngine::quote_potential_withdraw) | [`withdraw`](PoolEngine::withdraw) |
//! | Cross-asset withdrawal | [`quote_potential_withdraw_from_other_asset`](PoolEngine::quote_potential_withdraw_from_other_asset) | [`withdraw_from_other_asset`](PoolEngine::withdraw_from_other_asset) |
//! | Cross-asset ceiling | [`quote_max_initial_asset_withdrawable`](PoolEngine::quote_max_initial_asset_withdrawable) | |
//! | Deposit | [`quote_potential_deposit`](PoolEngine::quote_potential_deposit) | [`deposit`](PoolEngine::deposit) |
//! | Swap | [`quote_potential_swap`](PoolEngine::quote_potential_swap) | [`swap`](PoolEngine::swap) |

mod context;
mod plan;
mod pool_engine;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use context::ExecutionContext;
pub use pool_engine::PoolEngine;
