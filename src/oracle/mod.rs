//! Oracle access: validated conversion between group members and an
//! in-memory rate source.

mod rate_adapter;
mod static_source;

pub use rate_adapter::OracleRateAdapter;
pub use static_source::StaticRateSource;
