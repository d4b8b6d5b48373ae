//! # Coverage Pool
//!
//! Pricing and accounting core of a multi-asset liquidity pool whose
//! assets are grouped into aggregate accounts sharing a price oracle.
//!
//! Every asset has a ledger of **cash** (tokens held) and **liability**
//! (tokens owed to depositors, equal to the receipt-share supply). The
//! ratio `cash / liability` is the asset's *coverage*. A slippage curve
//! penalizes operations that lower coverage and rewards those that raise
//! it. Assets of one aggregate group can be withdrawn against each other
//! ("withdraw from other asset") or swapped, at the oracle rate.
//!
//! Every quote equals the amount the following execution settles, and no
//! execution leaves a ledger half-updated: ledgers are mutated on copies,
//! custody settles all transfers in one batch, and only then are the
//! copies committed.
//!
//! # Quick Start
//!
//! ```rust
//! use coverage_pool::config::{AssetConfig, CurveConfig, GroupConfig, PoolConfig};
//! use coverage_pool::custody::InMemoryCustody;
//! use coverage_pool::domain::{Address, Amount, Decimals, GroupId, Timestamp, Token};
//! use coverage_pool::engine::{ExecutionContext, PoolEngine};
//! use coverage_pool::oracle::StaticRateSource;
//!
//! let avax = Token::new(Address::repeat(1), Decimals::MAX);
//! let yyavax = Token::new(Address::repeat(2), Decimals::MAX);
//! let group = GroupId::new(1);
//!
//! // A: cash = liability = 100; B: cash = 170, liability = 100
//! let config = PoolConfig::new(
//!     CurveConfig::default(),
//!     vec![
//!         AssetConfig::with_balances(avax, Address::repeat(11), Amount::from_whole(100), Amount::from_whole(100))
//!             .expect("valid"),
//!         AssetConfig::with_balances(yyavax, Address::repeat(12), Amount::from_whole(170), Amount::from_whole(100))
//!             .expect("valid"),
//!     ],
//!     vec![GroupConfig::new(group, vec![avax.address(), yyavax.address()], Some(yyavax.address()))
//!         .expect("valid")],
//! )
//! .expect("valid pool");
//!
//! let rates = StaticRateSource::new().with_rate(
//!     group,
//!     "1.012287344219239968".parse().expect("rate"),
//!     Timestamp::MAX,
//! );
//! let mut custody = InMemoryCustody::new(Address::repeat(0xee));
//! let alice = Address::repeat(0xa1);
//! custody.credit(avax.address(), custody.pool_account(), Amount::from_whole(100)).expect("seed");
//! custody.credit(yyavax.address(), custody.pool_account(), Amount::from_whole(170)).expect("seed");
//! custody.credit(Address::repeat(11), alice, Amount::from_whole(100)).expect("seed");
//!
//! let mut pool = PoolEngine::new(&config, rates, custody).expect("pool");
//! let now = Timestamp::new(1_000);
//!
//! // Burn A shares to receive 70 yyAVAX.
//! let max = pool
//!     .quote_max_initial_asset_withdrawable(&avax.address(), &yyavax.address(), now)
//!     .expect("max");
//! assert_eq!(max.to_string(), "70.860114095346797760");
//!
//! let record = pool
//!     .withdraw_from_other_asset(
//!         ExecutionContext::new(alice, now),
//!         &avax.address(),
//!         &yyavax.address(),
//!         Amount::from_whole(70),
//!         Amount::from_whole(70),
//!         alice,
//!         now.plus_secs(60),
//!     )
//!     .expect("withdraw");
//! assert_eq!(record.amount_out, Amount::from_whole(70));
//! assert_eq!(record.shares_burned, max);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  ExecutionContext { caller, now }
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐   RateSource    ┌────────────────────┐
//! │  PoolEngine   │───────────────▶│ OracleRateAdapter   │
//! └──────┬───────┘                 └────────────────────┘
//!        │ plan on ledger copies
//!        ▼
//! ┌──────────────┐                 ┌────────────────────┐
//! │LedgerRegistry │────snapshots──▶│   SlippageCurve     │
//! └──────┬───────┘                 └────────────────────┘
//!        │ settle(&[Transfer]) then commit
//!        ▼
//! ┌──────────────┐
//! │ TokenCustody  │
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Wad`](domain::Wad), [`Quote`](domain::Quote), records |
//! | [`ledger`] | [`AssetLedger`](ledger::AssetLedger), [`LedgerRegistry`](ledger::LedgerRegistry), groups |
//! | [`curve`] | [`SlippageCurve`](curve::SlippageCurve) pricing functions |
//! | [`oracle`] | [`OracleRateAdapter`](oracle::OracleRateAdapter), [`StaticRateSource`](oracle::StaticRateSource) |
//! | [`custody`] | [`InMemoryCustody`](custody::InMemoryCustody) |
//! | [`engine`] | [`PoolEngine`](engine::PoolEngine) quote and execute paths |
//! | [`traits`] | Collaborator seams: [`TokenCustody`](traits::TokenCustody), [`RateSource`](traits::RateSource), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Validated configuration structs |
//! | [`math`]   | Checked arithmetic and 256-bit `mul_div` |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `debug` for quotes and oracle
//! rejections, `info` for settled executions, `warn` for rejected ones.
//! It never installs a subscriber.

pub mod config;
pub mod curve;
pub mod custody;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod oracle;
pub mod prelude;
pub mod traits;
