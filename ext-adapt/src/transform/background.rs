use manifest_core::Manifest;
use serde_json::{json, Value};

use super::TransformNote;

/// Replace the background context with a single-entry `scripts` list.
///
/// The entry is the service worker when it is a non-empty string, otherwise
/// the first listed script. A background with neither becomes
/// `{"scripts": [null]}`.
pub fn apply(out: &mut Manifest, source: &Manifest, notes: &mut Vec<TransformNote>) {
    let Some(background) = source.get("background") else {
        return;
    };

    let entry = match background_entry(background) {
        Some(entry) => entry.clone(),
        None => {
            notes.push(TransformNote::new(
                "background",
                "no service_worker or scripts entry; emitting a null script",
            ));
            Value::Null
        }
    };

    let extra_scripts = background
        .get("scripts")
        .and_then(Value::as_array)
        .map(|scripts| scripts.len().saturating_sub(1))
        .unwrap_or(0);
    if extra_scripts > 0 {
        notes.push(TransformNote::new(
            "background.scripts",
            format!("only the first script is kept; dropped {extra_scripts} more"),
        ));
    }

    out.insert("background", json!({ "scripts": [entry] }));
}

fn background_entry(background: &Value) -> Option<&Value> {
    let service_worker = background
        .get("service_worker")
        .filter(|sw| sw.as_str().is_some_and(|s| !s.is_empty()));

    service_worker.or_else(|| {
        background
            .get("scripts")
            .and_then(Value::as_array)
            .and_then(|scripts| scripts.first())
    })
}
