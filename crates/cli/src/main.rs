mod args;
mod commands;
mod config;
mod error;
mod generator;
mod logging;
mod report;

use clap::Parser;
use std::io;
use std::process::ExitCode;

use args::{Cli, Command};
use error::Error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = config::load_config(cli.config.as_deref())?;
    logging::init_tracing(cli.verbose, cli.log_level.as_deref(), &config.logging.level)?;

    let mut stdout = io::stdout().lock();
    match cli.into_command() {
        Command::Solve(args) => commands::solve(args, &config.solver, &mut stdout),
        Command::Generate(args) => commands::generate(args, config.generator, &mut stdout),
    }
}
