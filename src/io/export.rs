//! Flat-file snapshot export
//!
//! Writes the bank's customers and accounts as pipe-delimited lines grouped
//! under header markers. Write-only: there is no loader and the format is
//! not read back. Rows are emitted sorted by identifier so the export is
//! deterministic.
//!
//! ```text
//! === BANK DATA EXPORT ===
//! Bank Name: First National Bank
//! Export Date: 2026-08-29 14:03:22
//!
//! === CUSTOMERS ===
//! CUST1001|Ada|Lovelace|ada@example.com|555-0100|12 Analytical Row
//!
//! === ACCOUNTS ===
//! SAV10001|CUST1001|SAVINGS|1000.00|2026-08-29|ACTIVE
//! ```

use crate::core::Bank;
use crate::types::BankError;
use chrono::Local;
use serde::Serialize;
use std::io::Write;

/// One customer line in the export
#[derive(Debug, Serialize)]
struct CustomerRow<'a> {
    id: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: &'a str,
    address: &'a str,
}

/// One account line in the export
#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    id: &'a str,
    customer: &'a str,
    kind: &'static str,
    balance: String,
    opened: String,
    status: &'static str,
}

/// Write the full bank snapshot to `output`
///
/// # Errors
///
/// [`BankError::Io`] if the underlying writer fails.
pub fn write_export(bank: &Bank, output: &mut dyn Write) -> Result<(), BankError> {
    writeln!(output, "=== BANK DATA EXPORT ===")?;
    writeln!(output, "Bank Name: {}", bank.name())?;
    writeln!(
        output,
        "Export Date: {}",
        Local::now().naive_local().format("%Y-%m-%d %H:%M:%S")
    )?;

    writeln!(output, "\n=== CUSTOMERS ===")?;
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .from_writer(&mut *output);
        for customer in bank.customers() {
            writer.serialize(CustomerRow {
                id: customer.id(),
                first_name: customer.first_name(),
                last_name: customer.last_name(),
                email: customer.email(),
                phone: customer.phone(),
                address: customer.address(),
            })?;
        }
        writer.flush()?;
    }

    writeln!(output, "\n=== ACCOUNTS ===")?;
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .from_writer(&mut *output);
        for account in bank.accounts() {
            writer.serialize(AccountRow {
                id: account.id(),
                customer: account.customer_id(),
                kind: account.kind().tag(),
                balance: account.balance().to_string(),
                opened: account.opened_on().format("%Y-%m-%d").to_string(),
                status: if account.is_active() { "ACTIVE" } else { "CLOSED" },
            })?;
        }
        writer.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn sample_bank() -> Bank {
        let mut bank = Bank::new("First National Bank");
        let ada = bank.create_customer(
            "Ada",
            "Lovelace",
            "ada@example.com",
            "555-0100",
            "12 Analytical Row",
        );
        let bob = bank.create_customer("Bob", "Byrne", "bob@example.com", "555-0101", "3 Main St");
        bank.open_savings(&ada, dec(100_000)).unwrap();
        let chk = bank.open_checking(&bob, dec(20_000)).unwrap();
        bank.close_account(&chk).unwrap();
        bank
    }

    #[test]
    fn test_export_contains_markers_and_rows() {
        let bank = sample_bank();
        let mut output = Vec::new();
        write_export(&bank, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("=== BANK DATA EXPORT ===\nBank Name: First National Bank\n"));
        assert!(text.contains("\n=== CUSTOMERS ===\n"));
        assert!(text.contains("\n=== ACCOUNTS ===\n"));
        assert!(text.contains("CUST1001|Ada|Lovelace|ada@example.com|555-0100|12 Analytical Row\n"));
        assert!(text.contains("CUST1002|Bob|Byrne|bob@example.com|555-0101|3 Main St\n"));
        assert!(text.contains("SAV10001|CUST1001|SAVINGS|1000.00|"));
        assert!(text.contains("|ACTIVE\n"));
        assert!(text.contains("CHK10002|CUST1002|CHECKING|200.00|"));
        assert!(text.contains("|CLOSED\n"));
    }

    #[test]
    fn test_customers_precede_accounts_and_are_sorted() {
        let bank = sample_bank();
        let mut output = Vec::new();
        write_export(&bank, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let customers_at = text.find("=== CUSTOMERS ===").unwrap();
        let accounts_at = text.find("=== ACCOUNTS ===").unwrap();
        assert!(customers_at < accounts_at);

        let first = text.find("CUST1001|").unwrap();
        let second = text.find("CUST1002|").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_bank_exports_only_headers() {
        let bank = Bank::new("Empty Bank");
        let mut output = Vec::new();
        write_export(&bank, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Bank Name: Empty Bank"));
        assert!(text.contains("=== CUSTOMERS ==="));
        assert!(text.contains("=== ACCOUNTS ==="));
        assert!(!text.contains("CUST"));
    }
}
