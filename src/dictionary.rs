// SPDX-License-Identifier: MIT

//! Translation dictionary: language codes mapped to nested string trees.
//!
//! The dictionary is loaded once from JSON and is immutable for the life
//! of a session. Leaves are strings; internal nodes are maps. Lookup walks
//! a dot-delimited key one segment at a time and returns `None` on any
//! miss rather than erroring.
//!
//! Literal dots inside key names cannot be escaped — `"a.b"` is always a
//! two-segment path, never a flat key. Known limitation.

use crate::error::Error;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A node in a translation tree: a string leaf or a nested map.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationValue {
    Leaf(String),
    Node(BTreeMap<String, TranslationValue>),
}

impl TranslationValue {
    /// Build a tree from parsed JSON. Only objects and string leaves are
    /// legal; numbers, booleans, arrays, and nulls carry no translation
    /// meaning and are rejected.
    pub fn from_json(value: &JsonValue) -> Result<Self, Error> {
        match value {
            JsonValue::String(text) => Ok(TranslationValue::Leaf(text.clone())),
            JsonValue::Object(map) => {
                let mut children = BTreeMap::new();
                for (key, child) in map {
                    children.insert(key.clone(), TranslationValue::from_json(child)?);
                }
                Ok(TranslationValue::Node(children))
            }
            other => Err(Error::Config(format!(
                "translation leaves must be strings, found {}",
                json_type_name(other)
            ))),
        }
    }

    /// Walk a dotted key through the tree. Returns `None` if the key is
    /// empty, any segment is missing, or the final value is not a leaf.
    pub fn lookup(&self, dotted_key: &str) -> Option<&str> {
        if dotted_key.is_empty() {
            return None;
        }
        let mut current = self;
        for segment in dotted_key.split('.') {
            match current {
                TranslationValue::Node(children) => current = children.get(segment)?,
                TranslationValue::Leaf(_) => return None,
            }
        }
        match current {
            TranslationValue::Leaf(text) => Some(text),
            TranslationValue::Node(_) => None,
        }
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Top-level dictionary: language code -> translation tree.
///
/// Language order is sorted lexicographically so "first available
/// language" stays deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    languages: Vec<String>,
    trees: BTreeMap<String, TranslationValue>,
}

impl Dictionary {
    /// Build a dictionary from a parsed JSON root object keyed by
    /// language code. Each language must map to an object, not a bare
    /// string.
    pub fn from_json(root: &JsonValue) -> Result<Self, Error> {
        let JsonValue::Object(map) = root else {
            return Err(Error::Config(
                "translations root must be a JSON object keyed by language code".into(),
            ));
        };
        let mut trees = BTreeMap::new();
        for (language, tree) in map {
            match TranslationValue::from_json(tree)? {
                node @ TranslationValue::Node(_) => {
                    trees.insert(language.clone(), node);
                }
                TranslationValue::Leaf(_) => {
                    return Err(Error::Config(format!(
                        "language {language:?} must map to an object of translations"
                    )));
                }
            }
        }
        let languages = trees.keys().cloned().collect();
        Ok(Self { languages, trees })
    }

    /// Parse a dictionary from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        let root: JsonValue = serde_json::from_str(text)?;
        Self::from_json(&root)
    }

    /// Load a dictionary from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Top-level language codes, in stable (sorted) order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn contains_language(&self, code: &str) -> bool {
        self.trees.contains_key(code)
    }

    /// The translation tree for one language.
    pub fn tree(&self, language: &str) -> Option<&TranslationValue> {
        self.trees.get(language)
    }

    /// Dotted-key lookup within one language.
    pub fn lookup(&self, language: &str, dotted_key: &str) -> Option<&str> {
        self.trees.get(language)?.lookup(dotted_key)
    }
}
