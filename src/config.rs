// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Root configuration loaded from `codehelp.yaml`.
///
/// This file controls:
/// - Where the callable server listens
/// - Which Judge0 endpoint and RapidAPI host are used
/// - Which Gemini endpoint and model are used
/// - The names of the secrets holding each API key
///
/// Every section is optional. An absent file means "use the defaults".
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub judge: JudgeConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Callable server section.
///
/// Example:
///
/// server:
///   addr: 0.0.0.0:8080
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

/// Judge0 (RapidAPI) section.
#[derive(Debug, Deserialize, Clone)]
pub struct JudgeConfig {
    #[serde(default = "default_judge_base_url")]
    pub base_url: String,

    /// Value sent as `X-RapidAPI-Host`
    #[serde(default = "default_judge_host")]
    pub host: String,

    /// Name of the secret holding the RapidAPI key
    #[serde(default = "default_judge_key_secret")]
    pub key_secret: String,

    /// Optional request timeout in milliseconds.
    ///
    /// Unset means the call waits for the judge to finish.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: default_judge_base_url(),
            host: default_judge_host(),
            key_secret: default_judge_key_secret(),
            timeout_ms: None,
        }
    }
}

/// Gemini section.
#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Name of the secret holding the Gemini API key
    #[serde(default = "default_gemini_key_secret")]
    pub key_secret: String,

    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            key_secret: default_gemini_key_secret(),
            timeout_ms: None,
        }
    }
}

fn default_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_judge_base_url() -> String {
    "https://judge0-ce.p.rapidapi.com".to_string()
}

fn default_judge_host() -> String {
    "judge0-ce.p.rapidapi.com".to_string()
}

fn default_judge_key_secret() -> String {
    "RAPIDAPI_KEY".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_key_secret() -> String {
    "GEMINI_KEY".to_string()
}

impl Config {
    /// Load and parse `codehelp.yaml` from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_yaml(&raw)
    }

    /// Load the config at `path` if one was given, otherwise use defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        // An empty document deserializes to `null`, not an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(raw).context("Failed to parse YAML config")
    }
}
