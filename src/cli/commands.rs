//! Line-oriented command dispatcher
//!
//! The thin text front end over the engine: one command per line, dispatched
//! to [`Bank`] operations. Engine errors are printed and the loop continues;
//! no error is fatal to the session.
//!
//! ```text
//! customer <first> <last> <email> <phone> <address...>
//! contact <customer> <email> <phone> <address...>
//! open savings|checking <customer> <amount>
//! open loan <customer> <principal> <months>
//! deposit <account> <amount>
//! withdraw <account> <amount>
//! transfer <from> <to> <amount>
//! interest | close <account> | info <account> | history <account>
//! customers | accounts | report | export <path> | help | quit
//! ```

use crate::core::Bank;
use crate::io::write_export;
use crate::types::BankError;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufRead, Write};

/// Read commands from `input` until EOF or `quit`, writing responses to
/// `out`
///
/// Blank lines and `#` comments are skipped. Engine errors are reported on
/// `out` and the loop continues.
pub fn run(bank: &mut Bank, input: impl BufRead, out: &mut dyn Write) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" || line == "exit" {
            writeln!(out, "Goodbye!")?;
            break;
        }
        if let Err(error) = dispatch(bank, line, out) {
            writeln!(out, "Error: {}", error)?;
        }
    }
    Ok(())
}

/// Dispatch a single command line
fn dispatch(bank: &mut Bank, line: &str, out: &mut dyn Write) -> Result<(), BankError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["customer", first, last, email, phone, address @ ..] if !address.is_empty() => {
            let id = bank.create_customer(first, last, email, phone, &address.join(" "));
            writeln!(out, "Customer created successfully with ID: {}", id)?;
        }
        ["contact", customer, email, phone, address @ ..] if !address.is_empty() => {
            bank.update_customer_contact(
                customer,
                Some(email),
                Some(phone),
                Some(&address.join(" ")),
            )?;
            writeln!(out, "Contact details updated for {}", customer)?;
        }
        ["open", "savings", customer, amount] => {
            if let Some(amount) = parse_amount(amount, out)? {
                let id = bank.open_savings(customer, amount)?;
                writeln!(out, "Savings account created successfully with ID: {}", id)?;
            }
        }
        ["open", "checking", customer, amount] => {
            if let Some(amount) = parse_amount(amount, out)? {
                let id = bank.open_checking(customer, amount)?;
                writeln!(out, "Checking account created successfully with ID: {}", id)?;
            }
        }
        ["open", "loan", customer, principal, months] => {
            let term: u32 = match months.parse() {
                Ok(term) => term,
                Err(_) => {
                    writeln!(out, "Unrecognized term: {}", months)?;
                    return Ok(());
                }
            };
            if let Some(principal) = parse_amount(principal, out)? {
                let id = bank.open_loan(customer, principal, term)?;
                writeln!(out, "Loan account created successfully with ID: {}", id)?;
            }
        }
        ["deposit", account, amount] => {
            if let Some(amount) = parse_amount(amount, out)? {
                bank.deposit(account, amount)?;
                if let Some(account) = bank.account(account) {
                    writeln!(
                        out,
                        "Deposited ${:.2} to {}. New balance: ${:.2}",
                        amount,
                        account.id(),
                        account.balance()
                    )?;
                }
            }
        }
        ["withdraw", account, amount] => {
            if let Some(amount) = parse_amount(amount, out)? {
                if bank.withdraw(account, amount)? {
                    if let Some(account) = bank.account(account) {
                        writeln!(
                            out,
                            "Withdrew ${:.2} from {}. New balance: ${:.2}",
                            amount,
                            account.id(),
                            account.balance()
                        )?;
                    }
                } else {
                    writeln!(out, "Withdrawals not allowed on loan accounts.")?;
                }
            }
        }
        ["transfer", from, to, amount] => {
            if let Some(amount) = parse_amount(amount, out)? {
                if bank.transfer(from, to, amount)? {
                    writeln!(
                        out,
                        "Transfer of ${:.2} completed from {} to {}",
                        amount, from, to
                    )?;
                } else {
                    writeln!(out, "Withdrawals not allowed on loan accounts.")?;
                }
            }
        }
        ["interest"] => {
            writeln!(out, "=== Processing Monthly Interest ===")?;
            for (account, delta) in bank.accrue_monthly_interest() {
                writeln!(out, "{}: interest of ${:.2} applied", account, delta)?;
            }
        }
        ["close", account] => {
            bank.close_account(account)?;
            writeln!(out, "Account {} has been closed.", account)?;
        }
        ["info", account] => {
            let account = bank
                .account(account)
                .ok_or_else(|| BankError::account_not_found(account))?;
            writeln!(out, "{}", account)?;
        }
        ["history", account] => {
            let account = bank
                .account(account)
                .ok_or_else(|| BankError::account_not_found(account))?;
            writeln!(out, "=== Transaction History for Account: {} ===", account.id())?;
            if account.history().is_empty() {
                writeln!(out, "No transactions found.")?;
            }
            for tx in account.history() {
                writeln!(out, "{}", tx)?;
            }
        }
        ["customers"] => {
            for customer in bank.customers() {
                writeln!(
                    out,
                    "{}: {} <{}> ({} accounts)",
                    customer.id(),
                    customer.full_name(),
                    customer.email(),
                    customer.accounts().len()
                )?;
            }
        }
        ["accounts"] => {
            for account in bank.accounts() {
                writeln!(
                    out,
                    "{} | {} | {} | ${:.2} | {}",
                    account.id(),
                    account.customer_id(),
                    account.kind().tag(),
                    account.balance(),
                    if account.is_active() { "ACTIVE" } else { "CLOSED" }
                )?;
            }
        }
        ["report"] => {
            let summary = bank.summary();
            writeln!(out, "========== BANK REPORT ==========")?;
            writeln!(out, "Bank Name: {}", bank.name())?;
            writeln!(out, "Total Customers: {}", summary.customers)?;
            writeln!(out, "Total Accounts: {}", summary.accounts)?;
            writeln!(out, "Total Transactions: {}", summary.transactions)?;
            writeln!(out, "Savings Accounts: {}", summary.savings_accounts)?;
            writeln!(out, "Checking Accounts: {}", summary.checking_accounts)?;
            writeln!(out, "Loan Accounts: {}", summary.loan_accounts)?;
            writeln!(out, "Total Deposits: ${:.2}", summary.total_deposits)?;
            writeln!(out, "=================================")?;
        }
        ["export", path] => {
            let mut file = File::create(path)?;
            write_export(bank, &mut file)?;
            writeln!(out, "Bank data saved to {}", path)?;
        }
        ["help"] => {
            writeln!(out, "Commands:")?;
            writeln!(out, "  customer <first> <last> <email> <phone> <address...>")?;
            writeln!(out, "  contact <customer> <email> <phone> <address...>")?;
            writeln!(out, "  open savings|checking <customer> <amount>")?;
            writeln!(out, "  open loan <customer> <principal> <months>")?;
            writeln!(out, "  deposit <account> <amount>")?;
            writeln!(out, "  withdraw <account> <amount>")?;
            writeln!(out, "  transfer <from> <to> <amount>")?;
            writeln!(out, "  interest | close <account> | info <account> | history <account>")?;
            writeln!(out, "  customers | accounts | report | export <path> | quit")?;
        }
        _ => {
            writeln!(out, "Unknown command: '{}'. Try 'help'.", line)?;
        }
    }
    Ok(())
}

/// Parse a monetary amount, reporting unparsable input on `out`
fn parse_amount(text: &str, out: &mut dyn Write) -> Result<Option<Decimal>, BankError> {
    match text.parse::<Decimal>() {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            writeln!(out, "Unrecognized amount: {}", text)?;
            Ok(None)
        }
    }
}
