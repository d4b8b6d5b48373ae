//! Per-call execution context.

use crate::domain::{Address, Timestamp};

/// Who is calling and when.
///
/// `caller` supplies the input tokens or shares of an execution; `now` is
/// compared against the caller's deadline and against oracle expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecutionContext {
    /// Account supplying tokens or shares.
    pub caller: Address,
    /// Current time.
    pub now: Timestamp,
}

impl ExecutionContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(caller: Address, now: Timestamp) -> Self {
        Self { caller, now }
    }
}
