//! Bank Ledger Engine CLI
//!
//! Line-oriented front end over the ledger engine.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --name "First National Bank"
//! cargo run -- --script session.txt
//! ```
//!
//! Commands are read one per line from stdin (or the script file) and
//! dispatched to the engine; responses and recoverable errors go to stdout.
//! See the `help` command for the full command list.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unreadable script file, broken output stream)

use bank_ledger_engine::cli;
use bank_ledger_engine::core::Bank;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    let args = cli::parse_args();
    let mut bank = Bank::new(&args.name);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &args.script {
        Some(path) => match File::open(path) {
            Ok(file) => cli::run(&mut bank, BufReader::new(file), &mut out),
            Err(error) => {
                eprintln!("Error: cannot open script {}: {}", path.display(), error);
                process::exit(1);
            }
        },
        None => cli::run(&mut bank, io::stdin().lock(), &mut out),
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
