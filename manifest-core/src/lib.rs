//! Generic extension manifest parsing, packaging, and diffing primitives used by
//! higher-level tools.

pub mod archive;
pub mod diff;
pub mod format;
pub mod manifest;
pub mod parser;
pub mod writer;

pub use archive::{list_entries, read_entry, read_manifest, replace_entry, ArchiveError};
pub use diff::{diff, diff_with_options, DiffEntry, DiffOptions};
pub use format::{format_summary, format_text};
pub use manifest::Manifest;
pub use parser::{parse, parse_file, ParseError};
pub use writer::{write, write_file, WriteError, WriteStyle};
