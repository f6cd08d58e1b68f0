//! Customer profile type
//!
//! Plain field storage with mutable contact details and the ordered list of
//! owned account identifiers. No invariants beyond the no-duplicate
//! convention on the account list; existence checks live in the registry.

use crate::types::{AccountId, CustomerId};

/// A bank customer: profile, contact fields and owned accounts
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    address: String,
    accounts: Vec<AccountId>,
}

impl Customer {
    /// Create a customer with no accounts
    pub(crate) fn new(
        id: CustomerId,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Self {
        Customer {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            accounts: Vec::new(),
        }
    }

    /// Append an owned account id, skipping duplicates
    pub(crate) fn add_account(&mut self, account_id: AccountId) {
        if !self.accounts.contains(&account_id) {
            self.accounts.push(account_id);
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Owned account identifiers, in opening order
    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_string();
    }

    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer::new(
            "CUST1001".to_string(),
            "Ada",
            "Lovelace",
            "ada@example.com",
            "555-0100",
            "12 Analytical Row",
        )
    }

    #[test]
    fn test_full_name_and_fields() {
        let customer = sample();
        assert_eq!(customer.id(), "CUST1001");
        assert_eq!(customer.full_name(), "Ada Lovelace");
        assert_eq!(customer.email(), "ada@example.com");
        assert!(customer.accounts().is_empty());
    }

    #[test]
    fn test_add_account_keeps_order_and_skips_duplicates() {
        let mut customer = sample();
        customer.add_account("SAV10001".to_string());
        customer.add_account("CHK10002".to_string());
        customer.add_account("SAV10001".to_string());

        assert_eq!(customer.accounts(), ["SAV10001", "CHK10002"]);
    }

    #[test]
    fn test_contact_setters() {
        let mut customer = sample();
        customer.set_email("ada@babbage.org");
        customer.set_phone("555-0199");
        customer.set_address("1 Engine Court");

        assert_eq!(customer.email(), "ada@babbage.org");
        assert_eq!(customer.phone(), "555-0199");
        assert_eq!(customer.address(), "1 Engine Court");
    }
}
