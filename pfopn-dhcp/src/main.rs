use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod export_cmd;
mod path_guard;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match export_cmd::run_export(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();
}
