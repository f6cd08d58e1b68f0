//! Core business logic module
//!
//! - `bank` - the orchestrator owning all shared state and executing
//!   deposit/withdraw/transfer/interest operations
//! - `registry` - customer registry consulted for existence checks
//! - `sequence` - instance-owned monotonic identifier counters

pub mod bank;
pub mod registry;
pub mod sequence;

pub use bank::{Bank, BankSummary};
pub use registry::CustomerRegistry;
pub use sequence::SequenceGenerator;
