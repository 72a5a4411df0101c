//! Adapt packaged browser extensions to another manifest generation and browser.
//!
//! A Manifest V3 package built for Chromium browsers cannot be loaded as-is by
//! browsers that still expect Manifest V2 fields. This library rewrites the
//! schema-specific manifest fields and leaves extension code untouched.
//!
//! # Modules
//!
//! - [`transform`]: the manifest transformation rules
//! - [`profile`]: per-browser settings, embedded or loaded from TOML
//! - [`target`]: target browser and manifest version types
//! - [`naming`]: `{version}` templates for input and output packages
//! - [`package_version`]: version lookup in `package.json`
//! - [`report`]: terminal rendering of manifest diffs and notes
//!
//! Parsing, serialization, zip access, and diffing live in `manifest-core`.
//!
//! # Examples
//!
//! ```
//! use ext_adapt::target::{TargetBrowser, TargetSchema};
//! use ext_adapt::transform::transform;
//! use manifest_core::parse;
//!
//! let source = parse(br#"{"manifest_version":3,"background":{"service_worker":"bg.js"}}"#)?;
//! let adapted = transform(&source, &TargetSchema::v2(TargetBrowser::Firefox));
//! assert_eq!(adapted.to_string(), r#"{"manifest_version":2,"background":{"scripts":["bg.js"]}}"#);
//! # Ok::<(), manifest_core::ParseError>(())
//! ```

pub mod naming;
pub mod package_version;
pub mod profile;
pub mod report;
pub mod target;
pub mod transform;
