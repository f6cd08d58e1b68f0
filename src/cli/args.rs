use clap::Parser;
use std::path::PathBuf;

/// Run the retail bank ledger engine behind a line-oriented command loop
#[derive(Parser, Debug)]
#[command(name = "bank-ledger-engine")]
#[command(about = "Retail bank ledger engine with a text command interface", long_about = None)]
pub struct CliArgs {
    /// Bank name used in reports and the data export header
    #[arg(
        long = "name",
        value_name = "NAME",
        default_value = "First National Bank",
        help = "Bank name used in reports and exports"
    )]
    pub name: String,

    /// Command script to run instead of reading stdin
    #[arg(
        long = "script",
        value_name = "FILE",
        help = "Read commands from a file instead of stdin"
    )]
    pub script: Option<PathBuf>,
}
