// SPDX-License-Identifier: MIT

//! Missing-key audit across the languages of a dictionary.
//!
//! All languages are expected to carry the same key set; this report
//! shows how far each one drifts from the union of all dotted keys.

use crate::dictionary::{Dictionary, TranslationValue};
use serde::Serialize;

/// Coverage for every language against the union key set.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub total_keys: usize,
    pub languages: Vec<LanguageCoverage>,
}

/// Per-language coverage statistics.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageCoverage {
    pub language: String,
    pub present: usize,
    pub missing: Vec<String>,
    pub percent: f32,
}

impl Dictionary {
    /// Union of all dotted leaf keys across every language, sorted.
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for language in self.languages() {
            if let Some(tree) = self.tree(language) {
                collect_keys(tree, &mut String::new(), &mut keys);
            }
        }
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys from the union set that `language` does not provide.
    pub fn missing_keys(&self, language: &str) -> Vec<String> {
        self.all_keys()
            .into_iter()
            .filter(|key| self.lookup(language, key).is_none())
            .collect()
    }

    pub fn coverage_report(&self) -> CoverageReport {
        let total = self.all_keys().len();
        let languages = self
            .languages()
            .iter()
            .map(|language| {
                let missing = self.missing_keys(language);
                let present = total.saturating_sub(missing.len());
                let percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LanguageCoverage {
                    language: language.clone(),
                    present,
                    missing,
                    percent,
                }
            })
            .collect();
        CoverageReport {
            total_keys: total,
            languages,
        }
    }
}

fn collect_keys(value: &TranslationValue, prefix: &mut String, out: &mut Vec<String>) {
    match value {
        TranslationValue::Leaf(_) => {
            if !prefix.is_empty() {
                out.push(prefix.clone());
            }
        }
        TranslationValue::Node(children) => {
            for (key, child) in children {
                let saved = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                collect_keys(child, prefix, out);
                prefix.truncate(saved);
            }
        }
    }
}
