//! Account types for the bank ledger engine
//!
//! This module defines the [`Account`] structure and the closed set of
//! account variants ([`AccountKind`]): Savings, Checking and Loan. Each
//! variant carries its own parameters and enforces its own deposit,
//! withdrawal and interest rules; dispatch is a flat `match`, no hierarchy.
//!
//! Accounts own their balance and an append-only local transaction history.
//! Balance mutation validates before it writes: a rejected operation leaves
//! the account exactly as it was.
//!
//! # Variant rules
//!
//! | Variant  | Withdraw floor                    | Monthly interest               |
//! |----------|-----------------------------------|--------------------------------|
//! | Savings  | balance − amount ≥ minimum (100)  | balance × 0.035 / 12           |
//! | Checking | balance − amount ≥ −limit (500)   | balance × 0.001 / 12 if > 0    |
//! | Loan     | never disburses (plain `false`)   | debt grows by |balance| × 0.065 / 12 |
//!
//! A checking withdrawal that lands strictly below zero additionally incurs
//! a flat overdraft fee, once, after the amount itself is subtracted. A loan
//! balance is negative (outstanding debt); deposits pay it down toward zero.

use crate::types::{AccountId, BankError, CustomerId, Transaction};
use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};
use std::fmt;
use std::rc::Rc;

/// Months per year, as the fixed-point divisor for monthly rates
fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// Variant-specific parameters of an account
///
/// A closed tagged set; the three variants share the [`Account`] contract
/// and differ only in the rules encoded here.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    /// Interest-bearing account with a balance floor
    Savings {
        /// Annual interest rate (0.035)
        interest_rate: Decimal,
        /// Floor the balance may never drop below (100.00)
        minimum_balance: Decimal,
    },
    /// Transactional account allowing a bounded negative balance
    Checking {
        /// Maximum permitted overdraft magnitude (500.00)
        overdraft_limit: Decimal,
        /// Flat fee charged when a withdrawal crosses below zero (35.00)
        overdraft_fee: Decimal,
    },
    /// Outstanding debt; balance is negative until paid off
    Loan {
        /// Original principal disbursed
        principal: Decimal,
        /// Annual interest rate (0.065)
        interest_rate: Decimal,
        /// Term of the loan in months
        term_months: u32,
        /// Fixed installment from the standard amortization formula
        monthly_payment: Decimal,
    },
}

impl AccountKind {
    /// Savings parameters: 3.5% annual, 100.00 minimum balance
    pub fn savings() -> Self {
        AccountKind::Savings {
            interest_rate: Decimal::new(35, 3),
            minimum_balance: Decimal::new(100_00, 2),
        }
    }

    /// Checking parameters: 500.00 overdraft limit, 35.00 fee
    pub fn checking() -> Self {
        AccountKind::Checking {
            overdraft_limit: Decimal::new(500_00, 2),
            overdraft_fee: Decimal::new(35_00, 2),
        }
    }

    /// Loan parameters at 6.5% annual, with the installment precomputed:
    /// `P·r·(1+r)^n / ((1+r)^n − 1)` at monthly rate `r` over `n` months
    pub fn loan(principal: Decimal, term_months: u32) -> Self {
        let interest_rate = Decimal::new(65, 3);
        let monthly_rate = interest_rate / months_per_year();
        // Zero-term loans fall due in full immediately
        let monthly_payment = if term_months == 0 {
            principal
        } else {
            let factor = (Decimal::ONE + monthly_rate).powi(term_months as i64);
            principal * monthly_rate * factor / (factor - Decimal::ONE)
        };

        AccountKind::Loan {
            principal,
            interest_rate,
            term_months,
            monthly_payment,
        }
    }

    /// Upper-case type tag used in exports and listings
    pub fn tag(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "SAVINGS",
            AccountKind::Checking { .. } => "CHECKING",
            AccountKind::Loan { .. } => "LOAN",
        }
    }

    /// Identifier prefix for this variant (`SAV`, `CHK`, `LOAN`)
    pub fn prefix(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "SAV",
            AccountKind::Checking { .. } => "CHK",
            AccountKind::Loan { .. } => "LOAN",
        }
    }
}

/// A customer account: balance, variant rules and local transaction history
///
/// Created by the orchestrator on an opening request; soft-closed but never
/// removed. The history is append-only and shares record allocations with
/// the global ledger.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    customer_id: CustomerId,
    balance: Decimal,
    kind: AccountKind,
    opened_on: NaiveDate,
    active: bool,
    history: Vec<Rc<Transaction>>,
}

impl Account {
    /// Create an account in its opening state
    ///
    /// The orchestrator supplies the generated id and the starting balance
    /// (the initial deposit, or `-principal` for a loan).
    pub(crate) fn new(
        id: AccountId,
        customer_id: CustomerId,
        balance: Decimal,
        kind: AccountKind,
    ) -> Self {
        Account {
            id,
            customer_id,
            balance,
            kind,
            opened_on: Local::now().date_naive(),
            active: true,
            history: Vec::new(),
        }
    }

    /// Credit `amount` to the account
    ///
    /// For savings and checking this increases the balance; for a loan it
    /// pays debt down toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InvalidAmount`] if `amount <= 0`; the balance is
    /// untouched.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }
        self.balance += amount;
        Ok(())
    }

    /// Debit `amount` from the account
    ///
    /// Returns `Ok(true)` on success. A loan account never disburses funds
    /// through this path and returns `Ok(false)` without touching the
    /// balance; that refusal is an anticipated outcome, not an error, so it
    /// is reported through the boolean rather than `Err`.
    ///
    /// A checking withdrawal whose result is strictly negative incurs the
    /// flat overdraft fee once, after the amount is subtracted.
    ///
    /// # Errors
    ///
    /// * [`BankError::InvalidAmount`] if `amount <= 0` (every variant)
    /// * [`BankError::InsufficientFunds`] if the result would breach the
    ///   variant's floor
    pub fn withdraw(&mut self, amount: Decimal) -> Result<bool, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        match &self.kind {
            AccountKind::Savings {
                minimum_balance, ..
            } => {
                if self.balance - amount < *minimum_balance {
                    return Err(BankError::insufficient_funds(&self.id, self.balance, amount));
                }
                self.balance -= amount;
                Ok(true)
            }
            AccountKind::Checking {
                overdraft_limit,
                overdraft_fee,
            } => {
                if self.balance - amount < -*overdraft_limit {
                    return Err(BankError::insufficient_funds(&self.id, self.balance, amount));
                }
                let fee = *overdraft_fee;
                self.balance -= amount;
                if self.balance < Decimal::ZERO {
                    self.balance -= fee;
                }
                Ok(true)
            }
            AccountKind::Loan { .. } => Ok(false),
        }
    }

    /// Apply one month of interest and return the applied delta
    ///
    /// Savings: `balance × rate/12` credited. Checking: `balance × 0.001/12`
    /// credited only while the balance is positive. Loan: the debt magnitude
    /// grows by `|balance| × rate/12`; the returned delta is that magnitude.
    /// Never fails.
    pub fn accrue_interest(&mut self) -> Decimal {
        match &self.kind {
            AccountKind::Savings { interest_rate, .. } => {
                let interest = self.balance * *interest_rate / months_per_year();
                self.balance += interest;
                interest
            }
            AccountKind::Checking { .. } => {
                if self.balance > Decimal::ZERO {
                    let interest = self.balance * Decimal::new(1, 3) / months_per_year();
                    self.balance += interest;
                    interest
                } else {
                    Decimal::ZERO
                }
            }
            AccountKind::Loan { interest_rate, .. } => {
                let interest = self.balance.abs() * *interest_rate / months_per_year();
                self.balance -= interest;
                interest
            }
        }
    }

    /// Append a ledger record to the local history
    pub(crate) fn record(&mut self, tx: Rc<Transaction>) {
        self.history.push(tx);
    }

    /// Soft-close: flag inactive, keep balance and history
    pub(crate) fn close(&mut self) {
        self.active = false;
    }

    /// Account identifier
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Owning customer identifier
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Current signed balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Variant parameters
    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Date the account was opened
    pub fn opened_on(&self) -> NaiveDate {
        self.opened_on
    }

    /// Whether the account is still active (not soft-closed)
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Local transaction history, in insertion (chronological) order
    pub fn history(&self) -> &[Rc<Transaction>] {
        &self.history
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account ID: {}", self.id)?;
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        match &self.kind {
            AccountKind::Savings {
                interest_rate,
                minimum_balance,
            } => {
                writeln!(f, "Type: SAVINGS")?;
                writeln!(f, "Balance: ${:.2}", self.balance)?;
                writeln!(f, "Interest Rate: {:.1}%", *interest_rate * Decimal::new(100, 0))?;
                writeln!(f, "Minimum Balance: ${:.2}", minimum_balance)?;
            }
            AccountKind::Checking {
                overdraft_limit,
                overdraft_fee,
            } => {
                writeln!(f, "Type: CHECKING")?;
                writeln!(f, "Balance: ${:.2}", self.balance)?;
                writeln!(f, "Overdraft Limit: ${:.2}", overdraft_limit)?;
                writeln!(f, "Overdraft Fee: ${:.2}", overdraft_fee)?;
            }
            AccountKind::Loan {
                principal,
                interest_rate,
                term_months,
                monthly_payment,
            } => {
                writeln!(f, "Type: LOAN")?;
                writeln!(f, "Original Loan Amount: ${:.2}", principal)?;
                writeln!(f, "Remaining Balance: ${:.2}", self.balance.abs())?;
                writeln!(f, "Interest Rate: {:.1}%", *interest_rate * Decimal::new(100, 0))?;
                writeln!(f, "Term: {} months", term_months)?;
                writeln!(f, "Monthly Payment: ${:.2}", monthly_payment)?;
            }
        }
        writeln!(f, "Creation Date: {}", self.opened_on.format("%Y-%m-%d"))?;
        write!(f, "Status: {}", if self.active { "Active" } else { "Closed" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn savings(id: &str, balance: Decimal) -> Account {
        Account::new(id.into(), "CUST1001".into(), balance, AccountKind::savings())
    }

    fn checking(id: &str, balance: Decimal) -> Account {
        Account::new(id.into(), "CUST1001".into(), balance, AccountKind::checking())
    }

    fn loan(id: &str, principal: Decimal, term_months: u32) -> Account {
        Account::new(
            id.into(),
            "CUST1001".into(),
            -principal,
            AccountKind::loan(principal, term_months),
        )
    }

    #[test]
    fn test_savings_deposit_adds_unconditionally() {
        let mut account = savings("SAV10001", dec(100_000));
        account.deposit(dec(25_050)).unwrap();
        assert_eq!(account.balance(), dec(125_050));
    }

    #[test]
    fn test_savings_withdraw_respects_minimum_balance() {
        let mut account = savings("SAV10001", dec(100_000));

        // 950 would leave 50, below the 100 minimum
        let err = account.withdraw(dec(95_000)).unwrap_err();
        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), dec(100_000));

        // 800 leaves exactly 200
        assert!(account.withdraw(dec(80_000)).unwrap());
        assert_eq!(account.balance(), dec(20_000));
    }

    #[test]
    fn test_savings_withdraw_to_exact_minimum_succeeds() {
        let mut account = savings("SAV10001", dec(100_000));
        assert!(account.withdraw(dec(90_000)).unwrap());
        assert_eq!(account.balance(), dec(10_000));
    }

    #[test]
    fn test_checking_overdraft_fee_applied_once_after_amount() {
        let mut account = checking("CHK10001", dec(10_000));

        // 100 - 550 = -450, then the 35.00 fee lands once: -485
        assert!(account.withdraw(dec(55_000)).unwrap());
        assert_eq!(account.balance(), dec(-48_500));
    }

    #[test]
    fn test_checking_no_fee_when_balance_stays_non_negative() {
        let mut account = checking("CHK10001", dec(10_000));
        assert!(account.withdraw(dec(10_000)).unwrap());
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_checking_withdraw_beyond_overdraft_limit_fails() {
        let mut account = checking("CHK10001", dec(10_000));

        // 100 - 650 = -550, past the -500 limit
        let err = account.withdraw(dec(65_000)).unwrap_err();
        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), dec(10_000));
    }

    #[test]
    fn test_loan_withdraw_refuses_without_error() {
        let mut account = loan("LOAN10001", dec(120_000), 12);

        assert!(!account.withdraw(dec(5_000)).unwrap());
        assert_eq!(account.balance(), dec(-120_000));
    }

    #[test]
    fn test_loan_payment_reduces_debt_toward_zero() {
        let mut account = loan("LOAN10001", dec(120_000), 12);

        account.deposit(dec(10_000)).unwrap();
        assert_eq!(account.balance(), dec(-110_000));
    }

    #[test]
    fn test_loan_installment_matches_amortization_formula() {
        let account = loan("LOAN10001", dec(120_000), 12);

        let monthly_rate = Decimal::new(65, 3) / Decimal::from(12);
        let factor = (Decimal::ONE + monthly_rate).powi(12);
        let expected = dec(120_000) * monthly_rate * factor / (factor - Decimal::ONE);

        match account.kind() {
            AccountKind::Loan {
                monthly_payment,
                term_months,
                principal,
                ..
            } => {
                assert_eq!(*monthly_payment, expected);
                assert_eq!(*term_months, 12);
                assert_eq!(*principal, dec(120_000));
            }
            other => panic!("expected a loan, got {:?}", other),
        }
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-100, 2))]
    fn test_deposit_rejects_non_positive_amounts(#[case] amount: Decimal) {
        for mut account in [
            savings("SAV10001", dec(50_000)),
            checking("CHK10002", dec(50_000)),
            loan("LOAN10003", dec(50_000), 6),
        ] {
            let before = account.balance();
            let err = account.deposit(amount).unwrap_err();
            assert!(matches!(err, BankError::InvalidAmount { .. }));
            assert_eq!(account.balance(), before);
        }
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-100, 2))]
    fn test_withdraw_rejects_non_positive_amounts(#[case] amount: Decimal) {
        for mut account in [
            savings("SAV10001", dec(50_000)),
            checking("CHK10002", dec(50_000)),
            loan("LOAN10003", dec(50_000), 6),
        ] {
            let before = account.balance();
            let err = account.withdraw(amount).unwrap_err();
            assert!(matches!(err, BankError::InvalidAmount { .. }));
            assert_eq!(account.balance(), before);
        }
    }

    #[test]
    fn test_savings_interest_scales_balance() {
        let mut account = savings("SAV10001", dec(100_000));

        let expected = dec(100_000) * Decimal::new(35, 3) / Decimal::from(12);
        let delta = account.accrue_interest();

        assert_eq!(delta, expected);
        assert_eq!(account.balance(), dec(100_000) + expected);
    }

    #[test]
    fn test_checking_interest_only_on_positive_balance() {
        let mut positive = checking("CHK10001", dec(20_000));
        let expected = dec(20_000) * Decimal::new(1, 3) / Decimal::from(12);
        assert_eq!(positive.accrue_interest(), expected);
        assert_eq!(positive.balance(), dec(20_000) + expected);

        let mut overdrawn = checking("CHK10002", dec(-10_000));
        assert_eq!(overdrawn.accrue_interest(), Decimal::ZERO);
        assert_eq!(overdrawn.balance(), dec(-10_000));
    }

    #[test]
    fn test_loan_interest_grows_debt() {
        let mut account = loan("LOAN10001", dec(120_000), 12);

        let expected = dec(120_000) * Decimal::new(65, 3) / Decimal::from(12);
        let delta = account.accrue_interest();

        assert_eq!(delta, expected);
        assert_eq!(account.balance(), dec(-120_000) - expected);
    }

    #[test]
    fn test_close_flags_inactive_but_keeps_state() {
        let mut account = savings("SAV10001", dec(50_000));
        account.close();
        assert!(!account.is_active());
        assert_eq!(account.balance(), dec(50_000));

        // Double close stays a no-op
        account.close();
        assert!(!account.is_active());
    }

    #[rstest]
    #[case(AccountKind::savings(), "SAVINGS", "SAV")]
    #[case(AccountKind::checking(), "CHECKING", "CHK")]
    #[case(AccountKind::loan(Decimal::new(120_000, 2), 12), "LOAN", "LOAN")]
    fn test_kind_tags_and_prefixes(
        #[case] kind: AccountKind,
        #[case] tag: &str,
        #[case] prefix: &str,
    ) {
        assert_eq!(kind.tag(), tag);
        assert_eq!(kind.prefix(), prefix);
    }
}
