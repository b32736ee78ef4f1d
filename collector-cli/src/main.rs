//! Binary crate for the `weather-collector` job.
//!
//! This crate focuses on:
//! - Logging initialization
//! - Loading configuration from the environment
//! - Mapping the run outcome to a process exit code

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
