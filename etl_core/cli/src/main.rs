mod commands;

use crate::commands::{handle_run, RunArgs};

use clap::{Parser, Subcommand};
use common::error::EtlError;
use std::path::PathBuf;
use time::macros::format_description;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "upetl")]
pub struct Cli {
    #[arg(
        long = "config-path",
        short = 'c',
        help = "path to config file",
        global = true
    )]
    pub config_path: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Fetch users and posts, join them, and replace the destination table
    Run(RunArgs),
}

fn run_cmd(func: Result<(), EtlError>) {
    if let Err(e) = func {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let time_format =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:2]");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_timer(fmt::time::LocalTime::new(time_format))
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Cmd::Run(args) => run_cmd(handle_run(args, cli.config_path.clone())),
    }
}
