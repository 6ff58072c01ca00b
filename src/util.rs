// src/util.rs

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Read a UTF-8 file into a String with a clear error message.
///
/// Used by `codehelp execute --file`.
pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Resolve a dot-path into a JSON value.
///
/// Supports:
/// - Object keys: "content.parts"
/// - Array indices: "candidates.0.content"
///
/// Returns `None` as soon as any segment cannot be resolved.
pub fn get_by_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;

    for segment in path.split('.') {
        if segment.is_empty() {
            return None;
        }

        // Try array index first
        if let Ok(index) = segment.parse::<usize>() {
            current = current.get(index)?;
        } else {
            current = current.get(segment)?;
        }
    }

    Some(current)
}
