//! Error types for the bank ledger engine
//!
//! All validation failures are synchronous and reported to the immediate
//! caller; no operation mutates state before its validation passes, and no
//! error is fatal to the process. The CLI layer catches these at the top of
//! its loop and continues.

use crate::types::{AccountId, CustomerId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank ledger engine
///
/// Each variant carries enough context to diagnose the rejected operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Non-positive amount passed to deposit or withdraw
    ///
    /// Recoverable; the target account is left unchanged.
    #[error("Invalid amount specified: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal would breach the account variant's balance floor
    ///
    /// Savings accounts must keep their minimum balance; checking accounts
    /// may not exceed their overdraft limit. Recoverable; the account is
    /// left unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account that rejected the withdrawal
        account: AccountId,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// No account registered under the given identifier
    #[error("Account not found: {account}")]
    AccountNotFound {
        /// The unknown account identifier
        account: AccountId,
    },

    /// No customer registered under the given identifier
    #[error("Customer not found: {customer}")]
    CustomerNotFound {
        /// The unknown customer identifier
        customer: CustomerId,
    },

    /// I/O error while writing a data export
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O failure
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

// Helper constructors, mirroring the variant fields

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        BankError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create a CustomerNotFound error
    pub fn customer_not_found(customer: &str) -> Self {
        BankError::CustomerNotFound {
            customer: customer.to_string(),
        }
    }
}
