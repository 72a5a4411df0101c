//! Read and rewrite single entries of zipped extension packages.
//!
//! Only the operations needed to swap a manifest are supported: list entries,
//! read one entry, and write a copy of the package with one entry replaced.
//! Untouched entries are copied raw so their compressed bytes never change.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::manifest::Manifest;
use crate::parser::{parse, ParseError};

/// Errors that can occur while reading or writing a package archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The package file could not be opened (missing, locked, or unreadable).
    #[error("failed to open package {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    /// The package is not a readable zip container.
    #[error("invalid package archive {path}: {source}")]
    Zip { path: String, source: ZipError },
    /// The requested entry does not exist in the package.
    #[error("entry '{entry}' not found in package {path}")]
    MissingEntry { path: String, entry: String },
    /// Reading an entry or writing the output package failed.
    #[error("I/O error on package {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// An entry was read but did not contain a valid manifest.
    #[error("failed to parse '{entry}' in package {path}: {source}")]
    Parse {
        path: String,
        entry: String,
        source: ParseError,
    },
}

/// List entry names in archive order.
pub fn list_entries(path: &Path) -> Result<Vec<String>, ArchiveError> {
    let mut archive = open_archive(path)?;
    (0..archive.len())
        .map(|index| {
            archive
                .by_index_raw(index)
                .map(|file| file.name().to_string())
                .map_err(|source| ArchiveError::Zip {
                    path: path.display().to_string(),
                    source,
                })
        })
        .collect()
}

/// Return the uncompressed bytes of `entry`.
pub fn read_entry(path: &Path, entry: &str) -> Result<Vec<u8>, ArchiveError> {
    let mut archive = open_archive(path)?;
    let mut file = archive.by_name(entry).map_err(|err| match err {
        ZipError::FileNotFound => ArchiveError::MissingEntry {
            path: path.display().to_string(),
            entry: entry.to_string(),
        },
        source => ArchiveError::Zip {
            path: path.display().to_string(),
            source,
        },
    })?;

    let mut bytes = Vec::with_capacity(usize::try_from(file.size()).unwrap_or_default());
    file.read_to_end(&mut bytes)
        .map_err(|source| ArchiveError::Io {
            path: path.display().to_string(),
            source,
        })?;
    Ok(bytes)
}

/// Read `entry` and parse it as a manifest.
pub fn read_manifest(path: &Path, entry: &str) -> Result<Manifest, ArchiveError> {
    let bytes = read_entry(path, entry)?;
    parse(&bytes).map_err(|source| ArchiveError::Parse {
        path: path.display().to_string(),
        entry: entry.to_string(),
        source,
    })
}

/// Write a copy of `input` to `output` with `entry` replaced by `contents`.
///
/// Every other entry is copied raw, in its original order. The new entry is
/// deflated and written last; it is added if `input` did not contain it.
/// `output` must not be the same file as `input`.
///
/// The package is assembled in a temporary file next to `output` and renamed
/// into place once complete, so a failed write never leaves a partial package.
pub fn replace_entry(
    input: &Path,
    output: &Path,
    entry: &str,
    contents: &[u8],
) -> Result<(), ArchiveError> {
    let mut archive = open_archive(input)?;
    let io_err = |source| ArchiveError::Io {
        path: output.display().to_string(),
        source,
    };
    let out_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staged = NamedTempFile::new_in(out_dir).map_err(io_err)?;
    let mut writer = ZipWriter::new(staged);
    let zip_err = |source| ArchiveError::Zip {
        path: output.display().to_string(),
        source,
    };

    for index in 0..archive.len() {
        let file = archive.by_index_raw(index).map_err(|source| ArchiveError::Zip {
            path: input.display().to_string(),
            source,
        })?;
        if file.name() == entry {
            continue;
        }
        writer.raw_copy_file(file).map_err(zip_err)?;
    }

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer.start_file(entry, options).map_err(zip_err)?;
    writer.write_all(contents).map_err(io_err)?;
    let staged = writer.finish().map_err(zip_err)?;
    staged.persist(output).map_err(|err| io_err(err.error))?;
    Ok(())
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>, ArchiveError> {
    let file = File::open(path).map_err(|source| ArchiveError::Open {
        path: path.display().to_string(),
        source,
    })?;
    ZipArchive::new(file).map_err(|source| ArchiveError::Zip {
        path: path.display().to_string(),
        source,
    })
}
