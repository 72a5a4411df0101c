use serde_json::{Map, Value};

use crate::diff::result::DiffEntry;
use crate::parser::json_type_name;
use crate::Manifest;

/// Configures manifest diff behavior.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Include [`DiffEntry::Identical`] rows.
    pub include_identical: bool,
    /// Maximum recursion depth. `-1` means unlimited.
    pub max_depth: i32,
    /// Paths or key names to ignore.
    pub ignore_paths: Vec<String>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            include_identical: false,
            max_depth: -1,
            ignore_paths: Vec::new(),
        }
    }
}

/// Diff two manifests with default options.
pub fn diff(left: &Manifest, right: &Manifest) -> Vec<DiffEntry> {
    diff_with_options(left, right, &DiffOptions::default())
}

/// Diff two manifests with custom options.
pub fn diff_with_options(left: &Manifest, right: &Manifest, opts: &DiffOptions) -> Vec<DiffEntry> {
    let mut out = Vec::new();
    let mut ctx = DiffContext {
        opts,
        out: &mut out,
    };
    diff_object(left.as_map(), right.as_map(), "", 0, &mut ctx);
    out
}

struct DiffContext<'a, 'b> {
    opts: &'a DiffOptions,
    out: &'b mut Vec<DiffEntry>,
}

fn diff_value(
    left: &Value,
    right: &Value,
    path: &str,
    depth: i32,
    ctx: &mut DiffContext<'_, '_>,
) {
    if should_ignore(path, ctx.opts) {
        return;
    }

    if ctx.opts.max_depth >= 0 && depth > ctx.opts.max_depth {
        return;
    }

    let start_len = ctx.out.len();

    match (left, right) {
        (Value::Object(l), Value::Object(r)) => diff_object(l, r, path, depth, ctx),
        (Value::Array(l), Value::Array(r)) => diff_array(l, r, path, depth, ctx),
        (Value::Object(_) | Value::Array(_), _) | (_, Value::Object(_) | Value::Array(_)) => {
            ctx.out.push(DiffEntry::Structural {
                path: path.to_string(),
                description: format!(
                    "type mismatch: left={} right={}",
                    json_type_name(left),
                    json_type_name(right)
                ),
            });
        }
        (l, r) => {
            if l != r {
                ctx.out.push(DiffEntry::Modified {
                    path: path.to_string(),
                    left: l.to_string(),
                    right: r.to_string(),
                });
            }
        }
    }

    if ctx.opts.include_identical && ctx.out.len() == start_len {
        ctx.out.push(DiffEntry::Identical {
            path: path.to_string(),
        });
    }
}

fn diff_object(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    path: &str,
    depth: i32,
    ctx: &mut DiffContext<'_, '_>,
) {
    let mut keys: Vec<&String> = left.keys().collect();
    for key in right.keys() {
        if !left.contains_key(key) {
            keys.push(key);
        }
    }

    for key in keys {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        match (left.get(key), right.get(key)) {
            (Some(l), Some(r)) => diff_value(l, r, &child_path, depth + 1, ctx),
            (Some(l), None) => push_only(true, l, child_path, ctx),
            (None, Some(r)) => push_only(false, r, child_path, ctx),
            (None, None) => {}
        }
    }
}

fn diff_array(
    left: &[Value],
    right: &[Value],
    path: &str,
    depth: i32,
    ctx: &mut DiffContext<'_, '_>,
) {
    let max = left.len().max(right.len());
    for i in 0..max {
        let child_path = format!("{path}[{}]", i + 1);
        match (left.get(i), right.get(i)) {
            (Some(l), Some(r)) => diff_value(l, r, &child_path, depth + 1, ctx),
            (Some(l), None) => push_only(true, l, child_path, ctx),
            (None, Some(r)) => push_only(false, r, child_path, ctx),
            (None, None) => {}
        }
    }
}

fn push_only(on_left: bool, value: &Value, path: String, ctx: &mut DiffContext<'_, '_>) {
    if should_ignore(&path, ctx.opts) {
        return;
    }
    let value = value.clone();
    ctx.out.push(if on_left {
        DiffEntry::OnlyLeft { path, value }
    } else {
        DiffEntry::OnlyRight { path, value }
    });
}

fn should_ignore(path: &str, opts: &DiffOptions) -> bool {
    opts.ignore_paths.iter().any(|ignore| {
        path == ignore
            || path.ends_with(&format!(".{ignore}"))
            || path.starts_with(&format!("{ignore}."))
            || path.starts_with(&format!("{ignore}["))
            || path.contains(&format!(".{ignore}["))
    })
}
