//! JSON command-line arguments.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse an inline JSON document, or read it from a file when the
/// argument starts with `@`.
pub(crate) fn parse_json_arg(arg: &str) -> Result<Value> {
    match arg.strip_prefix('@') {
        Some(path) => {
            let raw = fs::read_to_string(Path::new(path))
                .with_context(|| format!("unable to read {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("{path} is not valid JSON"))
        }
        None => serde_json::from_str(arg).context("argument is not valid JSON"),
    }
}
