use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct PackageJson {
    version: Option<String>,
}

/// Errors returned while reading the package version.
#[derive(Debug, Error)]
pub enum PackageVersionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("{path} has no non-empty \"version\" field")]
    MissingVersion { path: String },
}

/// Read the `version` field of a `package.json` file.
pub fn read_package_version(path: &Path) -> Result<String, PackageVersionError> {
    let raw = fs::read_to_string(path).map_err(|source| PackageVersionError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: PackageJson =
        serde_json::from_str(&raw).map_err(|source| PackageVersionError::Json {
            path: path.display().to_string(),
            source,
        })?;

    parsed
        .version
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| PackageVersionError::MissingVersion {
            path: path.display().to_string(),
        })
}
