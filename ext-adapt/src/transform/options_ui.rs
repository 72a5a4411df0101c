use manifest_core::Manifest;
use serde_json::Value;

use super::TransformNote;
use crate::profile::TargetProfile;

/// Set `options_ui.browser_style = true` when the profile asks for it.
pub fn apply(
    out: &mut Manifest,
    source: &Manifest,
    profile: &TargetProfile,
    notes: &mut Vec<TransformNote>,
) {
    if !profile.force_browser_style {
        return;
    }
    let Some(options_ui) = source.get("options_ui") else {
        return;
    };

    match options_ui {
        Value::Object(fields) => {
            let mut fields = fields.clone();
            fields.insert("browser_style".to_string(), Value::Bool(true));
            out.insert("options_ui", Value::Object(fields));
        }
        _ => notes.push(TransformNote::new(
            "options_ui",
            "not an object; browser_style was not set",
        )),
    }
}
