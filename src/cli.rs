// src/cli.rs

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Callable functions for code execution (Judge0) and AI hints (Gemini).
///
/// `codehelp.yaml` is optional; built-in defaults point at the public APIs.
/// CLI flags only override config values.
#[derive(Parser, Debug)]
#[command(name = "codehelp", version, disable_help_subcommand = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// All supported CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve `executeCode` and `getAiHelp` over the callable HTTP protocol.
    Serve {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override listen address
        ///
        /// Example:
        /// --addr 0.0.0.0:8080
        #[arg(long)]
        addr: Option<String>,
    },

    /// Invoke `executeCode` once and print the judge result.
    #[command(group(ArgGroup::new("source").required(true).args(["file", "code"])))]
    Execute {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Judge0 language id (e.g. 71 = Python 3)
        #[arg(short, long)]
        language_id: i64,

        /// Read source code from this file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pass source code inline
        #[arg(long)]
        code: Option<String>,
    },

    /// Invoke `getAiHelp` once and print the answer.
    Ask {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Prompt text sent to the model
        prompt: String,
    },
}
