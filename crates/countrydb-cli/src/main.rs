//! countrydb — Command-line interface for countrydb-core
//!
//! Without a subcommand this binary starts the interactive menu: add, list,
//! search, update, filter, sort and summarize the country catalog, saving
//! the CSV file after every change and on exit.
//!
//! Usage examples
//! --------------
//!
//! - Start the interactive menu
//!   $ countrydb
//!   $ countrydb --data ./data/countries.csv
//!
//! - One-shot queries
//!   $ countrydb search arg
//!   $ countrydb continent europa
//!   $ countrydb range population 10000000 50000000
//!   $ countrydb stats --json
//!
//! - One-shot changes (saved immediately)
//!   $ countrydb add Peru 34000000 1285216 America
//!   $ countrydb update peru --population 34500000
//!   $ countrydb sort area --desc --save
//!
//! Data source
//! -----------
//!
//! The catalog is read from `countries.csv` in the current directory, or
//! from `--data <path>` / `COUNTRYDB_DATA`. When that file is missing or
//! has no valid rows, a built-in dataset of seven countries is used and the
//! file is created on the first save. Logs go to stderr; set `RUST_LOG` or
//! `--log-level` to change their verbosity.
mod args;
mod commands;
mod display;
mod shell;

use crate::args::{CliArgs, Commands};
use crate::shell::Shell;
use clap::Parser;
use countrydb_core::{Catalog, CountryStore};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_level);

    let data_path = args
        .data
        .unwrap_or_else(|| PathBuf::from(Catalog::default_dataset_filename()));
    let (mut store, report) = CountryStore::open(&data_path);
    if !report.skipped.is_empty() {
        tracing::info!(
            "{} malformed row(s) skipped while loading {}",
            report.skipped.len(),
            data_path.display()
        );
    }

    match args.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), io::stdout().lock(), store);
            shell.run()?;
        }
        command => {
            let stdout = io::stdout();
            commands::run(command, &mut store, &mut stdout.lock())?;
        }
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
