//! Manifest transformation toward an older schema generation.
//!
//! The transformer clones the source manifest once and then applies a fixed
//! sequence of rules to the clone. Every rule reads the *source* manifest, so
//! a rule never observes a field that an earlier rule rewrote:
//!
//! 1. `manifest_version` is set to the target version.
//! 2. [`action`] merges `action` over `browser_action`.
//! 3. [`background`] collapses the background context to one script.
//! 4. [`options_ui`] forces `options_ui.browser_style`.
//! 5. [`permissions`] folds `host_permissions` into `permissions`.
//! 6. [`csp`] flattens and filters `content_security_policy`.
//! 7. Legacy fields listed by the profile (`offline_enabled`) are removed.
//! 8. `action` and `host_permissions` are removed.
//!
//! Unexpected shapes never abort the transformation. The affected rule
//! produces a best-effort value and records a [`TransformNote`].

use std::fmt::{self, Display, Formatter};

use manifest_core::Manifest;
use serde::Serialize;
use serde_json::Value;

use crate::profile::TargetProfile;
use crate::target::TargetSchema;

pub mod action;
pub mod background;
pub mod csp;
pub mod options_ui;
pub mod permissions;

/// Fields consumed by the rules and never carried into the output.
const CONSUMED_FIELDS: [&str; 2] = ["action", "host_permissions"];

/// A degradation applied while transforming a malformed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformNote {
    pub field: String,
    pub message: String,
}

impl TransformNote {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for TransformNote {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of a transformation with the notes collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub manifest: Manifest,
    pub notes: Vec<TransformNote>,
}

/// Transform `manifest` for `target` using the built-in profile.
///
/// The input is never modified; the returned manifest shares no containers
/// with it.
pub fn transform(manifest: &Manifest, target: &TargetSchema) -> Manifest {
    transform_with_notes(manifest, target).manifest
}

/// Like [`transform`] but also returns the degradation notes.
pub fn transform_with_notes(manifest: &Manifest, target: &TargetSchema) -> Transformed {
    transform_with_profile(manifest, &TargetProfile::for_schema(target))
}

/// Transform `manifest` with an explicit profile.
pub fn transform_with_profile(source: &Manifest, profile: &TargetProfile) -> Transformed {
    let mut out = source.clone();
    let mut notes = Vec::new();

    out.insert(
        "manifest_version",
        Value::from(profile.manifest_version.number()),
    );
    action::apply(&mut out, source, &mut notes);
    background::apply(&mut out, source, &mut notes);
    options_ui::apply(&mut out, source, profile, &mut notes);
    permissions::apply(&mut out, source, &mut notes);
    csp::apply(&mut out, source, profile, &mut notes);

    for field in &profile.removed_fields {
        out.remove(field);
    }
    for field in CONSUMED_FIELDS {
        out.remove(field);
    }

    Transformed {
        manifest: out,
        notes,
    }
}
