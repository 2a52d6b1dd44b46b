//! lineproc CLI entrypoint.
//!
//! Parses arguments and hands over to the `cli` runner, which sets up logging,
//! processes the inputs and maps the outcome to an exit status.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
