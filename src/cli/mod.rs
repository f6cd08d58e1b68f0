// CLI module
// Argument parsing and the line-oriented command dispatcher

mod args;
pub mod commands;

pub use args::CliArgs;
pub use commands::run;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints its message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
