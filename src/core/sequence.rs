//! Identifier sequence generator
//!
//! Instance-owned monotonic counters for customer ids, account ids and
//! transaction ids. Owned by the orchestrator rather than living in global
//! state, so independent bank instances (and tests) never share sequences.
//!
//! Identifiers are never reused, including after an account is closed.
//! Account ids draw from a single counter shared across the variant
//! prefixes; the prefix tags the type, the counter guarantees uniqueness.

use crate::types::{AccountId, CustomerId, TransactionId};

/// Monotonic id counters for one bank instance
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    next_customer: u32,
    next_account: u32,
    next_transaction: TransactionId,
}

impl SequenceGenerator {
    /// Start counters at their conventional bases: customers at 1000,
    /// accounts at 10000, transactions at 0 (first record gets id 1)
    pub fn new() -> Self {
        SequenceGenerator {
            next_customer: 1000,
            next_account: 10000,
            next_transaction: 0,
        }
    }

    /// Fresh customer identifier (`CUST1001`, `CUST1002`, ...)
    pub fn next_customer_id(&mut self) -> CustomerId {
        self.next_customer += 1;
        format!("CUST{}", self.next_customer)
    }

    /// Fresh account identifier under the given variant prefix
    /// (`SAV10001`, `CHK10002`, ...)
    pub fn next_account_id(&mut self, prefix: &str) -> AccountId {
        self.next_account += 1;
        format!("{}{}", prefix, self.next_account)
    }

    /// Fresh transaction identifier
    pub fn next_transaction_id(&mut self) -> TransactionId {
        self.next_transaction += 1;
        self.next_transaction
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
