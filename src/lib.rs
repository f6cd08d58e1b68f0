//! Bank Ledger Engine Library
//! # Overview
//!
//! This library models a retail bank's core bookkeeping: customers,
//! polymorphic account types and an append-only transaction ledger, with an
//! orchestrator that enforces balance invariants and atomicity of money
//! movement.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Customer, Transaction, errors)
//! - [`cli`] - Argument parsing and the text command dispatcher
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - The orchestrator owning all shared state
//!   - [`core::registry`] - Customer registry for existence checks
//!   - [`core::sequence`] - Instance-owned monotonic id counters
//! - [`io`] - Write-only pipe-delimited data export
//!
//! # Account variants
//!
//! The engine supports three account types, each with its own rules:
//!
//! - **Savings**: balance floor of 100.00; 3.5% annual interest, monthly
//! - **Checking**: overdraft permitted to −500.00 with a 35.00 fee when a
//!   withdrawal crosses below zero; 0.1% annual interest on positive
//!   balances
//! - **Loan**: negative balance is outstanding debt; deposits pay it down,
//!   withdrawals are refused, interest grows the debt at 6.5% annual
//!
//! # Ledger guarantees
//!
//! Every successful operation files exactly one immutable [`types::Transaction`]
//! into the global ledger and into the local history of each account it
//! touches; a transfer either applies to both accounts or to neither, and
//! its single record is shared between both logs.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{Bank, BankSummary};
pub use crate::io::write_export;
pub use crate::types::{
    Account, AccountId, AccountKind, BankError, Customer, CustomerId, LedgerParty, Transaction,
    TransactionId, TransactionKind,
};
