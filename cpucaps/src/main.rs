//! `cpucaps`: report which hash and carry-less multiply extensions the CPU
//! offers, and check that every backend it can run produces known answers.
//!
//! Without a subcommand it behaves like `cpucaps probe sha-ni`.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod backends;
mod probe;
mod selftest;

use probe::Extension;
use selftest::Primitive;

#[derive(Debug, Parser)]
#[command(name = "cpucaps", version)]
#[command(about = "CPU hash extension probe and backend self-test", long_about = None)]
struct Cli {
    /// Log detection and dispatch decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Exit with 0 if the CPU has the extension, 1 otherwise
    Probe {
        #[arg(value_enum, default_value_t)]
        extension: Extension,

        /// Only set the exit status
        #[arg(short, long)]
        quiet: bool,
    },
    /// Run the known-answer checks on every available backend
    Selftest {
        #[arg(value_enum, default_value_t)]
        primitive: Primitive,
    },
    /// List every backend with its required features and availability
    Backends,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(args.verbose)?;

    let mut out = io::stdout().lock();
    let command = args.command.unwrap_or(Commands::Probe {
        extension: Extension::default(),
        quiet: false,
    });

    let success = match command {
        Commands::Probe { extension, quiet } => probe::run(&mut out, extension, quiet)?,
        Commands::Selftest { primitive } => selftest::run(&mut out, primitive)?,
        Commands::Backends => {
            backends::run(&mut out)?;
            true
        }
    };
    out.flush()?;

    Ok(exit_code(success))
}
