//! Fundamental domain value types.
//!
//! This module contains the value types that model the pool domain:
//! addresses, tokens, fixed-point amounts and ratios, quotes and settlement
//! records. All types are newtypes or plain records with validated
//! constructors where an invariant exists.

mod address;
mod amount;
mod decimals;
mod group_id;
mod quote;
mod rounding;
mod settlement;
mod timestamp;
mod token;
mod wad;

pub use address::Address;
pub use amount::Amount;
pub use decimals::Decimals;
pub use group_id::GroupId;
pub use quote::Quote;
pub use rounding::Rounding;
pub use settlement::{DepositRecord, SettlementRecord, SwapRecord};
pub use timestamp::Timestamp;
pub use token::Token;
pub use wad::{Wad, FRACTIONAL_DIGITS, SCALE};
