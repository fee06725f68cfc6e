// SPDX-License-Identifier: MIT

//! Flattens a translation tree into `{flattened_key: "dotted.source.path"}`.
//!
//! The flattened key is built from the path segments, each formatted with
//! the chosen casing strategy and joined by `_` (dashes are mapped to
//! underscores so the result is identifier-safe). The value is always the
//! dotted path of the ORIGINAL segments, which is what `lookup` expects.

use crate::dictionary::TranslationValue;
use std::collections::BTreeMap;

/// Casing strategy applied to each path segment of a flattened key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyFormat {
    #[default]
    Snake,
    Camel,
    Pascal,
    Upper,
}

/// Flatten a tree into sorted `flattened_key -> dotted_path` entries.
pub fn flatten(tree: &TranslationValue, format: KeyFormat) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    let mut path = Vec::new();
    walk(tree, &mut path, format, &mut result);
    result
}

fn walk(
    value: &TranslationValue,
    path: &mut Vec<String>,
    format: KeyFormat,
    out: &mut BTreeMap<String, String>,
) {
    match value {
        TranslationValue::Leaf(_) => {
            if path.is_empty() {
                return;
            }
            let flattened = path
                .iter()
                .map(|segment| format_segment(segment, format))
                .collect::<Vec<_>>()
                .join("_")
                .replace('-', "_");
            out.insert(flattened, path.join("."));
        }
        TranslationValue::Node(children) => {
            for (key, child) in children {
                path.push(key.clone());
                walk(child, path, format, out);
                path.pop();
            }
        }
    }
}

fn format_segment(segment: &str, format: KeyFormat) -> String {
    match format {
        KeyFormat::Snake => segment.to_string(),
        KeyFormat::Upper => segment.to_uppercase(),
        KeyFormat::Camel => recase(segment, false),
        KeyFormat::Pascal => recase(segment, true),
    }
}

/// Collapse `snake_case` into camel or pascal casing within one segment.
fn recase(segment: &str, mut upper_next: bool) -> String {
    let mut out = String::with_capacity(segment.len());
    for ch in segment.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
