//! Token custody implementations.

mod in_memory;

pub use in_memory::InMemoryCustody;
