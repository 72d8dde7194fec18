mod config;
mod data;
mod manager;
mod report;

use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Directory holding the CSV files and an optional config.toml.
    #[arg(long)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute Brookes' Δ for every CSV file in the data directory.
    Analyze,

    /// Compare the Δ values of two CSV files.
    Compare {
        #[arg(long)]
        first: PathBuf,

        #[arg(long)]
        second: PathBuf,
    },

    /// Remove result files.
    Clean,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mgr = Manager::new(args.data_dir).context("failed to construct mgr")?;

    match args.command {
        Command::Analyze => mgr.analyze_data()?,
        Command::Compare { first, second } => mgr.compare_fields(first, second)?,
        Command::Clean => mgr.clean_data()?,
    }

    Ok(())
}
