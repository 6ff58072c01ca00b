// src/secrets.rs

//! Secret resolution.
//!
//! API keys are looked up by name on every invocation, never cached.
//! Handlers receive a `SecretProvider` at construction time so tests can
//! substitute fixed values for the process environment.

use std::env;

/// Supplies secret string values by name.
pub trait SecretProvider: Send + Sync {
    /// Returns the secret, or `None` if it is not configured.
    fn secret(&self, name: &str) -> Option<String>;
}

/// Reads secrets from process environment variables.
///
/// `.env` files are loaded into the environment once at startup (see
/// `main.rs`), so both sources are visible here.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecrets;

impl SecretProvider for EnvSecrets {
    fn secret(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Resolve a secret that must be present and non-empty.
///
/// The error string is a description suitable for embedding in a
/// handler error message; it names the secret but never its value.
pub fn require(provider: &dyn SecretProvider, name: &str) -> Result<String, String> {
    match provider.secret(name) {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("secret {} is not configured", name)),
    }
}
