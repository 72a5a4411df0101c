use serde::Serialize;
use serde_json::Value;

/// A single diff outcome for a manifest path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DiffEntry {
    /// Value exists in both with identical content.
    Identical { path: String },
    /// Scalar value exists in both but differs.
    Modified {
        path: String,
        left: String,
        right: String,
    },
    /// Value only in the left input.
    OnlyLeft { path: String, value: Value },
    /// Value only in the right input.
    OnlyRight { path: String, value: Value },
    /// Shape mismatch (for example, a string replaced by an object).
    Structural { path: String, description: String },
}

impl DiffEntry {
    pub fn path(&self) -> &str {
        match self {
            DiffEntry::Identical { path }
            | DiffEntry::Modified { path, .. }
            | DiffEntry::OnlyLeft { path, .. }
            | DiffEntry::OnlyRight { path, .. }
            | DiffEntry::Structural { path, .. } => path,
        }
    }
}
