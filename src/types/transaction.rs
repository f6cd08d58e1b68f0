//! Transaction-related types for the bank ledger engine
//!
//! This module defines the immutable [`Transaction`] record, the kind and
//! party enums that classify a money movement, and the identifier aliases
//! used throughout the system.
//!
//! A transaction is an immutable fact: once constructed by the orchestrator
//! it is never mutated, and the same record is shared (via `Rc`) between the
//! global ledger and the local history of every account it touches. A
//! transfer therefore appears in three logs but exists exactly once.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Customer identifier, scheme-prefixed (`CUST1001`, `CUST1002`, ...)
pub type CustomerId = String;

/// Account identifier, scheme-prefixed by variant (`SAV10001`, `CHK10002`,
/// `LOAN10003`, ...)
pub type AccountId = String;

/// Transaction identifier
///
/// Monotonic per bank instance; never reused.
pub type TransactionId = u32;

/// Kinds of money movement recorded in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Credit into an account (including the seed deposit on opening)
    Deposit,
    /// Debit out of an account
    Withdrawal,
    /// Movement between two accounts; the single record is filed in both
    /// accounts' logs
    Transfer,
    /// Payment toward an outstanding loan balance
    LoanPayment,
    /// Monthly interest applied to an account
    InterestCredit,
}

impl TransactionKind {
    /// Upper-snake tag used by ledger display and export
    pub fn tag(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
            TransactionKind::Transfer => "TRANSFER",
            TransactionKind::LoanPayment => "LOAN_PAYMENT",
            TransactionKind::InterestCredit => "INTEREST_CREDIT",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One side of a money movement
///
/// Deposits from outside the bank originate at `External`; seed deposits,
/// loan disbursements and interest credits originate at `Bank`. Everything
/// else names an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerParty {
    /// The bank itself (account seeds, interest)
    Bank,
    /// Money entering or leaving the bank's books
    External,
    /// A registered account
    Account(AccountId),
}

impl fmt::Display for LedgerParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerParty::Bank => f.write_str("BANK"),
            LedgerParty::External => f.write_str("EXTERNAL"),
            LedgerParty::Account(id) => f.write_str(id),
        }
    }
}

/// Immutable record of one money movement
///
/// Constructed only by the orchestrator, immediately after the underlying
/// account mutation succeeded. Appended to the global ledger and to the
/// history of each account it touches; never mutated, never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    from: LedgerParty,
    to: LedgerParty,
    amount: Decimal,
    kind: TransactionKind,
    timestamp: NaiveDateTime,
    description: String,
}

impl Transaction {
    /// Create a new record, timestamped at construction
    pub(crate) fn new(
        id: TransactionId,
        from: LedgerParty,
        to: LedgerParty,
        amount: Decimal,
        kind: TransactionKind,
        description: &str,
    ) -> Self {
        Transaction {
            id,
            from,
            to,
            amount,
            kind,
            timestamp: Local::now().naive_local(),
            description: description.to_string(),
        }
    }

    /// Monotonic record identifier
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Source of the movement
    pub fn from(&self) -> &LedgerParty {
        &self.from
    }

    /// Destination of the movement
    pub fn to(&self) -> &LedgerParty {
        &self.to
    }

    /// Moved amount
    ///
    /// Non-negative for deposits and payments; the debited magnitude for
    /// withdrawals. Interest credits carry zero (the balance change is not
    /// captured in the ledger entry).
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Kind of movement
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Creation time
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Free-text description
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Type: {} | Amount: ${:.2} | Time: {} | From: {} | To: {} | Desc: {}",
            self.id,
            self.kind,
            self.amount,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.from,
            self.to,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TransactionKind::Deposit, "DEPOSIT")]
    #[case(TransactionKind::Withdrawal, "WITHDRAWAL")]
    #[case(TransactionKind::Transfer, "TRANSFER")]
    #[case(TransactionKind::LoanPayment, "LOAN_PAYMENT")]
    #[case(TransactionKind::InterestCredit, "INTEREST_CREDIT")]
    fn test_kind_tags(#[case] kind: TransactionKind, #[case] expected: &str) {
        assert_eq!(kind.tag(), expected);
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    #[case(LedgerParty::Bank, "BANK")]
    #[case(LedgerParty::External, "EXTERNAL")]
    #[case(LedgerParty::Account("SAV10001".to_string()), "SAV10001")]
    fn test_party_display(#[case] party: LedgerParty, #[case] expected: &str) {
        assert_eq!(party.to_string(), expected);
    }

    #[test]
    fn test_record_fields() {
        let tx = Transaction::new(
            7,
            LedgerParty::External,
            LedgerParty::Account("CHK10002".to_string()),
            Decimal::new(12550, 2),
            TransactionKind::Deposit,
            "Payday",
        );

        assert_eq!(tx.id(), 7);
        assert_eq!(tx.from(), &LedgerParty::External);
        assert_eq!(tx.to(), &LedgerParty::Account("CHK10002".to_string()));
        assert_eq!(tx.amount(), Decimal::new(12550, 2));
        assert_eq!(tx.kind(), TransactionKind::Deposit);
        assert_eq!(tx.description(), "Payday");
    }

    #[test]
    fn test_display_line_shape() {
        let tx = Transaction::new(
            1,
            LedgerParty::Bank,
            LedgerParty::Account("SAV10001".to_string()),
            Decimal::new(100000, 2),
            TransactionKind::Deposit,
            "Initial deposit",
        );

        let line = tx.to_string();
        assert!(line.starts_with("ID: 1 | Type: DEPOSIT | Amount: $1000.00 | Time: "));
        assert!(line.ends_with("| From: BANK | To: SAV10001 | Desc: Initial deposit"));
    }
}
