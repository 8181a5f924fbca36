// CLI module
// Command-line arguments and the interactive console

mod args;
mod console;

pub use args::CliArgs;
pub use console::{Console, ConsoleError};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., an unparseable shipping cost or an unknown flag)
/// or `--help` is given, clap prints the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
