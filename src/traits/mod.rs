//! Core trait abstractions.
//!
//! This module defines the seams between the pool and its collaborators:
//! [`TokenCustody`] for moving tokens, [`RateSource`] for oracle readings,
//! and [`FromConfig`] for configuration-driven construction.

mod custody;
mod from_config;
mod rate_source;

pub use custody::{TokenCustody, Transfer};
pub use from_config::FromConfig;
pub use rate_source::{OracleRate, RateSource};
