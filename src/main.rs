// src/main.rs

//! codehelp
//!
//! Entry point for the codehelp binary.
//!
//! The binary hosts two callable functions:
//! - `executeCode`: forwards source code to the Judge0 judging service
//! - `getAiHelp`: forwards a prompt to Gemini and returns the first answer
//!
//! Responsibilities of this file:
//! - Load `.env` and initialise tracing
//! - Parse CLI arguments
//! - Hand off to the command dispatcher
//!
//! There is intentionally *no business logic* here.

mod callable;
mod cli;
mod commands;
mod config;
mod error;
mod functions;
mod invocation_id;
mod runtime;
mod secrets;
mod util;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; secrets may come from the real environment.
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = cli::Cli::parse();

    commands::run(cli).await
}

fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
