use manifest_core::Manifest;
use serde_json::Value;

use super::TransformNote;

/// Append `host_permissions` entries to `permissions`.
///
/// Entries keep their order and duplicates are kept. The `host_permissions`
/// key itself is removed later by the caller.
pub fn apply(out: &mut Manifest, source: &Manifest, notes: &mut Vec<TransformNote>) {
    let Some(hosts) = source.get("host_permissions") else {
        return;
    };
    let Some(hosts) = hosts.as_array() else {
        notes.push(TransformNote::new(
            "host_permissions",
            "not an array; nothing was folded into permissions",
        ));
        return;
    };

    let mut permissions = match source.get("permissions") {
        Some(Value::Array(existing)) => existing.clone(),
        None => Vec::with_capacity(hosts.len()),
        Some(_) => {
            notes.push(TransformNote::new(
                "permissions",
                "not an array; replaced by host_permissions entries",
            ));
            Vec::with_capacity(hosts.len())
        }
    };
    permissions.extend(hosts.iter().cloned());

    out.insert("permissions", Value::Array(permissions));
}
