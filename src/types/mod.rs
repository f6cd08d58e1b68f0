//! Types module
//!
//! Core data structures used throughout the engine:
//! - `account`: accounts and the Savings/Checking/Loan variant rules
//! - `customer`: customer profiles and owned-account lists
//! - `transaction`: the immutable ledger record and its classifiers
//! - `error`: typed failures for every engine operation

pub mod account;
pub mod customer;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use customer::Customer;
pub use error::BankError;
pub use transaction::{
    AccountId, CustomerId, LedgerParty, Transaction, TransactionId, TransactionKind,
};
