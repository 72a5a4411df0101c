use manifest_core::Manifest;
use serde_json::Value;

use super::TransformNote;
use crate::profile::TargetProfile;

/// One `<name> <values...>` entry of a content security policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub values: Vec<&'a str>,
}

impl Directive<'_> {
    fn render(&self) -> String {
        if self.values.is_empty() {
            return self.name.to_string();
        }
        format!("{} {}", self.name, self.values.join(" "))
    }
}

/// Split a policy string into directives, skipping empty segments.
pub fn parse_policy(policy: &str) -> Vec<Directive<'_>> {
    policy
        .split(';')
        .filter_map(|segment| {
            let mut tokens = segment.split_whitespace();
            let name = tokens.next()?;
            Some(Directive {
                name,
                values: tokens.collect(),
            })
        })
        .collect()
}

/// Drop directives the profile does not support and reassemble the rest in order.
pub fn filter_policy(policy: &str, profile: &TargetProfile) -> String {
    parse_policy(policy)
        .iter()
        .filter(|directive| !profile.drops_csp_directive(directive.name))
        .map(Directive::render)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Flatten `content_security_policy` to a string and filter its directives.
///
/// Object policies use their `extension_pages` entry. Without one, the whole
/// object serialized as JSON text is parsed instead.
pub fn apply(
    out: &mut Manifest,
    source: &Manifest,
    profile: &TargetProfile,
    notes: &mut Vec<TransformNote>,
) {
    let Some(policy) = source.get("content_security_policy") else {
        return;
    };

    let policy = match policy {
        Value::String(policy) => policy.clone(),
        Value::Object(contexts) => match contexts.get("extension_pages") {
            Some(Value::String(pages)) => pages.clone(),
            Some(other) => {
                notes.push(TransformNote::new(
                    "content_security_policy.extension_pages",
                    "not a string; using its JSON text as the policy",
                ));
                other.to_string()
            }
            None => {
                notes.push(TransformNote::new(
                    "content_security_policy",
                    "object without extension_pages; using its JSON text as the policy",
                ));
                policy.to_string()
            }
        },
        other => {
            notes.push(TransformNote::new(
                "content_security_policy",
                "neither a string nor an object; using its JSON text as the policy",
            ));
            other.to_string()
        }
    };

    out.insert(
        "content_security_policy",
        Value::String(filter_policy(&policy, profile)),
    );
}
