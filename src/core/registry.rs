//! Customer registry
//!
//! In-memory map of customer ids to profiles. The orchestrator consults it
//! for existence checks before opening accounts; nothing else mutates it.
//! Customers are never deleted.

use crate::types::{Customer, CustomerId};
use std::collections::HashMap;

/// Registry of all known customers
#[derive(Debug, Clone, Default)]
pub struct CustomerRegistry {
    customers: HashMap<CustomerId, Customer>,
}

impl CustomerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        CustomerRegistry {
            customers: HashMap::new(),
        }
    }

    /// Register a customer under its id
    pub fn insert(&mut self, customer: Customer) {
        self.customers.insert(customer.id().clone(), customer);
    }

    /// Whether a customer id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.customers.contains_key(id)
    }

    /// Look up a customer
    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.get(id)
    }

    /// Look up a customer for mutation (contact updates, account list)
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Customer> {
        self.customers.get_mut(id)
    }

    /// All customers sorted by id, for deterministic listings and export
    pub fn all(&self) -> Vec<&Customer> {
        let mut customers: Vec<&Customer> = self.customers.values().collect();
        customers.sort_by_key(|customer| customer.id().clone());
        customers
    }

    /// Number of registered customers
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether no customers are registered
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
