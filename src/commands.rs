// src/commands.rs

use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::functions::{AssistRequest, ExecutionRequest, Functions};
use crate::runtime;
use crate::secrets::EnvSecrets;
use crate::util::read_to_string;

/// Entry point from `main.rs`.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve { config, addr } => {
            let mut cfg = Config::load_optional(config.as_deref())?;

            // CLI overrides
            if let Some(a) = addr {
                cfg.server.addr = a;
            }

            let functions = build_functions(&cfg)?;
            runtime::serve(&cfg.server.addr, Arc::new(functions)).await
        }

        Command::Execute {
            config,
            language_id,
            file,
            code,
        } => {
            let cfg = Config::load_optional(config.as_deref())?;
            let source_code = match (file, code) {
                (Some(path), _) => read_to_string(&path)?,
                (None, Some(inline)) => inline,
                (None, None) => anyhow::bail!("Either --file or --code is required"),
            };

            let functions = build_functions(&cfg)?;
            let verdict = functions
                .execute_code
                .call(ExecutionRequest {
                    source_code: Some(source_code),
                    language_id: Some(language_id),
                })
                .await?;

            print_json(&verdict)
        }

        Command::Ask { config, prompt } => {
            let cfg = Config::load_optional(config.as_deref())?;
            let functions = build_functions(&cfg)?;

            let answer = functions
                .ai_help
                .call(AssistRequest {
                    prompt: Some(prompt),
                })
                .await?;

            print_json(&answer)
        }
    }
}

fn build_functions(cfg: &Config) -> Result<Functions> {
    Functions::from_config(cfg, Arc::new(EnvSecrets))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialise output JSON")?
    );
    Ok(())
}
