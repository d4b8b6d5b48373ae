//! Ledger state: per-asset records, aggregate groups and their registry.
//!
//! | Type | Role |
//! |------|------|
//! | [`AssetLedger`] | Cash, liability and share supply of one token |
//! | [`LedgerState`] | `(cash, liability)` snapshot priced by the curve |
//! | [`AggregateGroup`] | Members sharing one oracle |
//! | [`LedgerRegistry`] | Owned map of all ledgers and groups |

mod asset_ledger;
mod group;
mod registry;

pub use asset_ledger::{AssetLedger, LedgerState};
pub use group::AggregateGroup;
pub use registry::LedgerRegistry;
