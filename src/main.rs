mod commands;
mod domain;
mod logging;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::completions_cmd::completions_command;
use crate::commands::estimate_cmd::estimate_command;
use clap::Parser;

fn main() -> ExitCode {
    logging::init_tracing();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Estimate { .. } => {
            if let Err(e) = estimate_command(cmd) {
                eprintln!("Failed to estimate: {e}");
                return ExitCode::FAILURE;
            }
        }
        cmd @ Commands::Completions { .. } => completions_command(cmd),
    }
    ExitCode::SUCCESS
}
