use manifest_core::Manifest;
use serde_json::{Map, Value};

use super::TransformNote;

/// Merge `action` over any existing `browser_action`.
///
/// Keys from `action` win on conflict. When `action` is absent the output's
/// `browser_action` is left exactly as the source had it.
pub fn apply(out: &mut Manifest, source: &Manifest, notes: &mut Vec<TransformNote>) {
    let Some(action) = source.get("action") else {
        return;
    };

    let layers = [
        ("browser_action", source.get("browser_action")),
        ("action", Some(action)),
    ];

    let mut merged = Map::new();
    for (field, layer) in layers {
        match layer {
            Some(Value::Object(fields)) => {
                for (key, value) in fields {
                    merged.insert(key.clone(), value.clone());
                }
            }
            None | Some(Value::Null) => {}
            Some(_) => notes.push(TransformNote::new(
                field,
                "not an object; its value was ignored when building browser_action",
            )),
        }
    }

    out.insert("browser_action", Value::Object(merged));
}
