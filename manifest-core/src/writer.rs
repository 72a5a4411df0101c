use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::manifest::Manifest;

/// Errors that can occur while serializing a [`Manifest`].
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize JSON.
    #[error("failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to write output file.
    #[error("failed to write manifest file: {0}")]
    Io(#[from] std::io::Error),
}

/// Output layout for serialized manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStyle {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indentation.
    Pretty,
}

/// Serialize a [`Manifest`] into UTF-8 JSON bytes.
pub fn write(manifest: &Manifest, style: WriteStyle) -> Result<Vec<u8>, WriteError> {
    let bytes = match style {
        WriteStyle::Compact => serde_json::to_vec(manifest)?,
        WriteStyle::Pretty => serde_json::to_vec_pretty(manifest)?,
    };
    Ok(bytes)
}

/// Serialize a [`Manifest`] and write it to `path`.
pub fn write_file(manifest: &Manifest, path: &Path, style: WriteStyle) -> Result<(), WriteError> {
    let bytes = write(manifest, style)?;
    fs::write(path, bytes)?;
    Ok(())
}
