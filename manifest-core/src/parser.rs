use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::manifest::Manifest;

/// Errors that can occur while parsing manifest JSON into a [`Manifest`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input bytes were not valid JSON text.
    #[error("failed to parse manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Input bytes were not valid UTF-8.
    #[error("invalid UTF-8 in manifest: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Failed to read input file.
    #[error("failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),
    /// Top-level JSON value was something other than an object.
    #[error("manifest must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Parse UTF-8 JSON bytes into a [`Manifest`].
pub fn parse(json: &[u8]) -> Result<Manifest, ParseError> {
    let text = std::str::from_utf8(json)?;
    // Packagers on Windows sometimes emit a byte-order mark.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    match serde_json::from_str::<Value>(text)? {
        Value::Object(fields) => Ok(Manifest::from_map(fields)),
        other => Err(ParseError::NotAnObject(json_type_name(&other))),
    }
}

/// Parse a manifest file from disk.
pub fn parse_file(path: &Path) -> Result<Manifest, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
