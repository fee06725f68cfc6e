// SPDX-License-Identifier: MIT

//! Dotted-key resolution and the value formatting pipeline.
//!
//! `resolve` is a deterministic pure function of (dictionary, language,
//! key, options). A missing key is never an error: it degrades to the
//! sentinel `_key_`, or to the raw key once the fallback markers are
//! stripped. Transforms run in a fixed order:
//!
//! case transform -> prefix content -> suffix content -> placeholder
//! replacement -> conditional mutation -> fallback-marker stripping

use crate::error::Error;
use crate::session::Session;
use std::collections::BTreeMap;
use tracing::warn;

/// Unified case selector. Mutually exclusive with the standalone
/// capitalize/uppercase/lowercase toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    Capitalize,
    Uppercase,
    Lowercase,
}

/// Gated content shared by the prefix, suffix, and mutate options. The
/// gate (`when`) defaults to off, so an all-default `Conditional` is a
/// no-op.
#[derive(Debug, Clone, Default)]
pub struct Conditional {
    pub when: bool,
    pub value: Option<String>,
    /// Resolve `value` as a translation key before applying it.
    pub with_translation: bool,
}

/// Placeholder substitution: every `{name}` occurrence in the working
/// string is replaced with the mapped value.
#[derive(Debug, Clone, Default)]
pub struct Replacements {
    pub values: BTreeMap<String, String>,
    /// Resolve each replacement value as a translation key first.
    pub with_translation: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    // Standalone case toggles, kept for parity with the unified
    // `text_case` selector; combining the two styles is an error.
    pub capitalize: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub text_case: Option<TextCase>,
    pub prefix_content: Option<Conditional>,
    pub suffix_content: Option<Conditional>,
    pub replace: Option<Replacements>,
    pub mutate: Option<Conditional>,
    /// Strip fallback markers from this one resolution.
    pub reject_default_fallback: bool,
    /// Resolve against this language instead of the session's active one.
    pub override_language: Option<String>,
}

impl Session {
    /// Resolve a dotted key against the active language with no
    /// formatting options.
    pub fn resolve(&self, key: &str) -> Result<String, Error> {
        self.resolve_with(key, &ResolveOptions::default())
    }

    /// Resolve a dotted key and run the value through the formatting
    /// pipeline.
    ///
    /// Fails with [`Error::NotConfigured`] when language or dictionary is
    /// unset, [`Error::LanguageNotFound`] when the dictionary has no entry
    /// for the active language, and [`Error::ConflictingOptions`] when
    /// both case-option styles are supplied. A missing key is not an
    /// error; see the module docs.
    pub fn resolve_with(&self, key: &str, options: &ResolveOptions) -> Result<String, Error> {
        if self.language().is_empty() || self.dictionary().is_empty() {
            return Err(Error::NotConfigured);
        }
        if !self.dictionary().contains_language(self.language()) {
            return Err(Error::LanguageNotFound(self.language().to_string()));
        }

        let lookup_language = match options.override_language.as_deref() {
            Some(code) if self.dictionary().contains_language(code) => code,
            Some(code) => {
                // Historic behavior: an unknown override silently used the
                // first loaded language. Preserved, but flagged.
                let first = self
                    .available_languages()
                    .first()
                    .map(String::as_str)
                    .unwrap_or_else(|| self.language());
                warn!(requested = %code, used = %first,
                    "override language not in dictionary, falling back to first available");
                first
            }
            None => self.language(),
        };

        let sentinel = format!("_{key}_");
        let mut value = match self.dictionary().lookup(lookup_language, key) {
            Some(text) => text.to_string(),
            None => sentinel.clone(),
        };

        value = self.format_value(value, options)?;
        if value.is_empty() {
            value = sentinel.clone();
        }

        if self.options().dev_mode && value == sentinel {
            warn!(%key, language = %lookup_language, "missing translation");
        }

        if options.reject_default_fallback || self.options().disable_default_fallback {
            value = strip_fallback_markers(&value);
        }
        Ok(value)
    }

    fn format_value(&self, mut value: String, options: &ResolveOptions) -> Result<String, Error> {
        if (options.capitalize || options.uppercase || options.lowercase)
            && options.text_case.is_some()
        {
            return Err(Error::ConflictingOptions);
        }

        if options.capitalize {
            value = capitalize(&value);
        }
        if options.uppercase {
            value = value.to_uppercase();
        }
        if options.lowercase {
            value = value.to_lowercase();
        }
        if let Some(case) = options.text_case {
            value = match case {
                TextCase::Capitalize => capitalize(&value),
                TextCase::Uppercase => value.to_uppercase(),
                TextCase::Lowercase => value.to_lowercase(),
            };
        }

        if let Some(prefix) = &options.prefix_content {
            if prefix.when {
                let content = self.conditional_content(prefix)?;
                if !content.is_empty() {
                    value = format!("{content}{value}");
                }
            }
        }

        if let Some(suffix) = &options.suffix_content {
            if suffix.when {
                let content = self.conditional_content(suffix)?;
                if !content.is_empty() {
                    value.push_str(&content);
                }
            }
        }

        if let Some(replace) = &options.replace {
            for (name, raw) in &replace.values {
                // Recursive resolution carries no options, so a replaced
                // value is never itself case-transformed or replaced into.
                let replacement = if replace.with_translation {
                    self.resolve(raw)?
                } else {
                    raw.clone()
                };
                value = value.replace(&format!("{{{name}}}"), &replacement);
            }
        }

        if let Some(mutate) = &options.mutate {
            if mutate.when {
                match &mutate.value {
                    Some(new_value) => {
                        value = if mutate.with_translation {
                            self.resolve(new_value)?
                        } else {
                            new_value.clone()
                        };
                    }
                    None if mutate.with_translation => {
                        value = self.resolve(&value)?;
                    }
                    None => {}
                }
            }
        }

        Ok(value)
    }

    fn conditional_content(&self, conditional: &Conditional) -> Result<String, Error> {
        let raw = conditional.value.clone().unwrap_or_default();
        if conditional.with_translation {
            self.resolve(&raw)
        } else {
            Ok(raw)
        }
    }
}

/// Uppercase the first character, leave the rest untouched.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Remove every `_` and `*` from the value. This is how the miss sentinel
/// collapses back to the raw key; legitimate underscores in translations
/// are stripped too, a quirk kept for compatibility.
fn strip_fallback_markers(value: &str) -> String {
    value.chars().filter(|c| *c != '_' && *c != '*').collect()
}
