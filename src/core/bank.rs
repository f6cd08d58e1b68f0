//! Bank orchestrator
//!
//! The [`Bank`] owns every piece of shared state (the customer registry,
//! the account table, the global ledger and the id sequences) and is the
//! only component allowed to mutate it. Every operation follows the same
//! shape: validate that the targets exist, delegate the balance mutation to
//! the account's variant rules, and only after that mutation succeeded file
//! an immutable [`Transaction`] into the touched account logs and the global
//! ledger.
//!
//! The engine is single-threaded and synchronous; each operation runs to
//! completion before the next is accepted, so no locking is needed. A
//! multi-client port would have to serialize mutations through one
//! coordination point or lock per-account in a fixed id order (transfer
//! touches two accounts).

use crate::core::registry::CustomerRegistry;
use crate::core::sequence::SequenceGenerator;
use crate::types::{
    Account, AccountId, AccountKind, BankError, Customer, CustomerId, LedgerParty, Transaction,
    TransactionKind,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::rc::Rc;

/// Aggregate counts for the bank report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankSummary {
    /// Registered customers
    pub customers: usize,
    /// All accounts, open or closed
    pub accounts: usize,
    /// Records in the global ledger
    pub transactions: usize,
    /// Savings accounts
    pub savings_accounts: usize,
    /// Checking accounts
    pub checking_accounts: usize,
    /// Loan accounts
    pub loan_accounts: usize,
    /// Sum of savings and checking balances (loans excluded)
    pub total_deposits: Decimal,
}

/// The ledger/bank orchestrator
///
/// Enforces the engine's two global guarantees: balances only move through
/// variant rules, and every successful movement is recorded exactly once in
/// the ledger (a transfer record is shared between both account logs, not
/// duplicated).
pub struct Bank {
    name: String,
    registry: CustomerRegistry,
    accounts: HashMap<AccountId, Account>,
    ledger: Vec<Rc<Transaction>>,
    sequence: SequenceGenerator,
}

impl Bank {
    /// Create an empty bank
    pub fn new(name: &str) -> Self {
        Bank {
            name: name.to_string(),
            registry: CustomerRegistry::new(),
            accounts: HashMap::new(),
            ledger: Vec::new(),
            sequence: SequenceGenerator::new(),
        }
    }

    /// Bank name, used by reports and the export header
    pub fn name(&self) -> &str {
        &self.name
    }

    // ---- customers ----

    /// Register a new customer and return the generated id
    pub fn create_customer(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> CustomerId {
        let id = self.sequence.next_customer_id();
        self.registry.insert(Customer::new(
            id.clone(),
            first_name,
            last_name,
            email,
            phone,
            address,
        ));
        id
    }

    /// Update a customer's mutable contact fields
    ///
    /// `None` fields are left unchanged.
    ///
    /// # Errors
    ///
    /// [`BankError::CustomerNotFound`] if the id is unregistered.
    pub fn update_customer_contact(
        &mut self,
        customer_id: &str,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> Result<(), BankError> {
        let customer = self
            .registry
            .get_mut(customer_id)
            .ok_or_else(|| BankError::customer_not_found(customer_id))?;

        if let Some(email) = email {
            customer.set_email(email);
        }
        if let Some(phone) = phone {
            customer.set_phone(phone);
        }
        if let Some(address) = address {
            customer.set_address(address);
        }
        Ok(())
    }

    /// Look up a customer
    pub fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.registry.get(customer_id)
    }

    /// All customers, sorted by id
    pub fn customers(&self) -> Vec<&Customer> {
        self.registry.all()
    }

    /// All accounts owned by a customer, in opening order
    ///
    /// # Errors
    ///
    /// [`BankError::CustomerNotFound`] if the id is unregistered.
    pub fn customer_accounts(&self, customer_id: &str) -> Result<Vec<&Account>, BankError> {
        let customer = self
            .registry
            .get(customer_id)
            .ok_or_else(|| BankError::customer_not_found(customer_id))?;

        Ok(customer
            .accounts()
            .iter()
            .filter_map(|id| self.accounts.get(id))
            .collect())
    }

    // ---- account opening ----

    /// Open a savings account and seed it with the initial deposit
    ///
    /// # Errors
    ///
    /// [`BankError::CustomerNotFound`] if the customer is unregistered.
    pub fn open_savings(
        &mut self,
        customer_id: &str,
        initial_deposit: Decimal,
    ) -> Result<AccountId, BankError> {
        self.open(customer_id, AccountKind::savings(), initial_deposit)
    }

    /// Open a checking account and seed it with the initial deposit
    ///
    /// # Errors
    ///
    /// [`BankError::CustomerNotFound`] if the customer is unregistered.
    pub fn open_checking(
        &mut self,
        customer_id: &str,
        initial_deposit: Decimal,
    ) -> Result<AccountId, BankError> {
        self.open(customer_id, AccountKind::checking(), initial_deposit)
    }

    /// Open a loan: the balance starts at `-principal` and the fixed
    /// installment is computed from the amortization formula
    ///
    /// # Errors
    ///
    /// * [`BankError::CustomerNotFound`] if the customer is unregistered
    /// * [`BankError::InvalidAmount`] if the principal is not positive
    pub fn open_loan(
        &mut self,
        customer_id: &str,
        principal: Decimal,
        term_months: u32,
    ) -> Result<AccountId, BankError> {
        if principal <= Decimal::ZERO {
            return Err(BankError::invalid_amount(principal));
        }
        self.open(
            customer_id,
            AccountKind::loan(principal, term_months),
            -principal,
        )
    }

    /// Shared opening path: existence check, fresh id, registration, seed
    /// record
    fn open(
        &mut self,
        customer_id: &str,
        kind: AccountKind,
        balance: Decimal,
    ) -> Result<AccountId, BankError> {
        if !self.registry.contains(customer_id) {
            return Err(BankError::customer_not_found(customer_id));
        }

        let account_id = self.sequence.next_account_id(kind.prefix());

        // The seed record for a loan carries the disbursed principal, not
        // the negative starting balance.
        let (seed_amount, seed_description) = match &kind {
            AccountKind::Loan { principal, .. } => (*principal, "Loan disbursement"),
            _ => (balance, "Initial deposit"),
        };

        let account = Account::new(account_id.clone(), customer_id.to_string(), balance, kind);
        self.accounts.insert(account_id.clone(), account);
        if let Some(customer) = self.registry.get_mut(customer_id) {
            customer.add_account(account_id.clone());
        }

        self.file(
            LedgerParty::Bank,
            LedgerParty::Account(account_id.clone()),
            seed_amount,
            TransactionKind::Deposit,
            seed_description,
            &[&account_id],
        );

        Ok(account_id)
    }

    // ---- money movement ----

    /// Deposit into an account (a payment, for loans)
    ///
    /// On success files one record: kind `Deposit` (or `LoanPayment` toward
    /// a loan), origin external.
    ///
    /// # Errors
    ///
    /// * [`BankError::AccountNotFound`] if the id is unknown
    /// * [`BankError::InvalidAmount`] if the amount is not positive
    pub fn deposit(&mut self, account_id: &str, amount: Decimal) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| BankError::account_not_found(account_id))?;

        account.deposit(amount)?;

        let (kind, description) = match account.kind() {
            AccountKind::Loan { .. } => (TransactionKind::LoanPayment, "Loan payment"),
            _ => (TransactionKind::Deposit, ""),
        };
        let account_id = account_id.to_string();
        self.file(
            LedgerParty::External,
            LedgerParty::Account(account_id.clone()),
            amount,
            kind,
            description,
            &[&account_id],
        );
        Ok(())
    }

    /// Withdraw from an account
    ///
    /// Returns `Ok(true)` and files a `Withdrawal` record on success.
    /// `Ok(false)` is the loan refusal: no funds moved, nothing filed.
    ///
    /// # Errors
    ///
    /// * [`BankError::AccountNotFound`] if the id is unknown
    /// * [`BankError::InvalidAmount`] if the amount is not positive
    /// * [`BankError::InsufficientFunds`] if the variant's floor would be
    ///   breached
    pub fn withdraw(&mut self, account_id: &str, amount: Decimal) -> Result<bool, BankError> {
        let account = self
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| BankError::account_not_found(account_id))?;

        if !account.withdraw(amount)? {
            return Ok(false);
        }

        let account_id = account_id.to_string();
        self.file(
            LedgerParty::Account(account_id.clone()),
            LedgerParty::External,
            amount,
            TransactionKind::Withdrawal,
            "",
            &[&account_id],
        );
        Ok(true)
    }

    /// Move `amount` between two accounts, atomically
    ///
    /// The withdrawal on the source runs first; if it fails (error or loan
    /// refusal) the destination is never touched and nothing is filed: the
    /// transfer either applies to both accounts or to neither. On success
    /// exactly one `Transfer` record is created and the same record is
    /// appended to both accounts' logs and the global ledger.
    ///
    /// # Errors
    ///
    /// * [`BankError::AccountNotFound`] if either id is unknown (checked
    ///   before any mutation)
    /// * [`BankError::InvalidAmount`] / [`BankError::InsufficientFunds`]
    ///   from the source withdrawal
    pub fn transfer(
        &mut self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<bool, BankError> {
        if !self.accounts.contains_key(from_id) {
            return Err(BankError::account_not_found(from_id));
        }
        if !self.accounts.contains_key(to_id) {
            return Err(BankError::account_not_found(to_id));
        }

        let withdrawn = self
            .accounts
            .get_mut(from_id)
            .ok_or_else(|| BankError::account_not_found(from_id))?
            .withdraw(amount)?;
        if !withdrawn {
            return Ok(false);
        }

        // A positive amount cannot be rejected by deposit, so no rollback
        // path is needed past this point.
        self.accounts
            .get_mut(to_id)
            .ok_or_else(|| BankError::account_not_found(to_id))?
            .deposit(amount)?;

        let from_id = from_id.to_string();
        let to_id = to_id.to_string();
        self.file(
            LedgerParty::Account(from_id.clone()),
            LedgerParty::Account(to_id.clone()),
            amount,
            TransactionKind::Transfer,
            "",
            &[&from_id, &to_id],
        );
        Ok(true)
    }

    /// Apply one month of interest to every active account
    ///
    /// Accounts are visited in id order for a deterministic ledger. One
    /// `InterestCredit` record is filed per account with **amount zero**:
    /// the credited value changes the balance but is not captured in the
    /// ledger entry. That convention is inherited from the system this
    /// engine reproduces and is kept because downstream reporting may rely
    /// on it; the actual per-account delta is returned to the caller
    /// instead.
    pub fn accrue_monthly_interest(&mut self) -> Vec<(AccountId, Decimal)> {
        let mut active_ids: Vec<AccountId> = self
            .accounts
            .values()
            .filter(|account| account.is_active())
            .map(|account| account.id().clone())
            .collect();
        active_ids.sort();

        let mut applied = Vec::with_capacity(active_ids.len());
        for id in active_ids {
            let delta = match self.accounts.get_mut(&id) {
                Some(account) => account.accrue_interest(),
                None => continue,
            };
            self.file(
                LedgerParty::Bank,
                LedgerParty::Account(id.clone()),
                Decimal::ZERO,
                TransactionKind::InterestCredit,
                "Monthly interest",
                &[&id],
            );
            applied.push((id, delta));
        }
        applied
    }

    /// Soft-close an account: flag it inactive, keep balance and history
    ///
    /// Closing an already-closed account is a safe no-op.
    ///
    /// # Errors
    ///
    /// [`BankError::AccountNotFound`] if the id is unknown.
    pub fn close_account(&mut self, account_id: &str) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| BankError::account_not_found(account_id))?;
        account.close();
        Ok(())
    }

    // ---- queries ----

    /// Look up an account
    pub fn account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    /// All accounts, sorted by id for deterministic listings
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.id().clone());
        accounts
    }

    /// The global ledger, in filing order
    pub fn ledger(&self) -> &[Rc<Transaction>] {
        &self.ledger
    }

    /// Aggregate counts and totals for the bank report
    pub fn summary(&self) -> BankSummary {
        let mut savings_accounts = 0;
        let mut checking_accounts = 0;
        let mut loan_accounts = 0;
        let mut total_deposits = Decimal::ZERO;

        for account in self.accounts.values() {
            match account.kind() {
                AccountKind::Savings { .. } => {
                    savings_accounts += 1;
                    total_deposits += account.balance();
                }
                AccountKind::Checking { .. } => {
                    checking_accounts += 1;
                    total_deposits += account.balance();
                }
                AccountKind::Loan { .. } => loan_accounts += 1,
            }
        }

        BankSummary {
            customers: self.registry.len(),
            accounts: self.accounts.len(),
            transactions: self.ledger.len(),
            savings_accounts,
            checking_accounts,
            loan_accounts,
            total_deposits,
        }
    }

    /// Construct a record and append the same instance to the global ledger
    /// and to each touched account's local log
    fn file(
        &mut self,
        from: LedgerParty,
        to: LedgerParty,
        amount: Decimal,
        kind: TransactionKind,
        description: &str,
        touched: &[&AccountId],
    ) -> Rc<Transaction> {
        let id = self.sequence.next_transaction_id();
        let tx = Rc::new(Transaction::new(id, from, to, amount, kind, description));
        for account_id in touched {
            if let Some(account) = self.accounts.get_mut(*account_id) {
                account.record(Rc::clone(&tx));
            }
        }
        self.ledger.push(Rc::clone(&tx));
        tx
    }
}
