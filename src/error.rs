// SPDX-License-Identifier: MIT

//! Error types for dictionary loading, session state, and key resolution.
//!
//! Missing individual translation keys are deliberately NOT errors — they
//! degrade to a miss sentinel in the resolver so a single absent string
//! never breaks rendering. Everything here is raised synchronously and
//! nothing is retried internally.

use crate::store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The session has no active language or no dictionary.
    #[error("language or dictionary is not configured")]
    NotConfigured,

    /// The dictionary has no entry for the active language.
    #[error("no translations found for language {0:?}")]
    LanguageNotFound(String),

    /// Attempt to switch to a language outside the available set.
    #[error("language {0:?} is not among the available languages")]
    InvalidLanguage(String),

    /// The `text_case` selector was combined with one of the standalone
    /// capitalize/uppercase/lowercase toggles.
    #[error("the text_case selector cannot be combined with the capitalize, uppercase, or lowercase options")]
    ConflictingOptions,

    /// Bad initialization input: empty dictionary, unknown fallback
    /// language, or a malformed translation tree.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read translations from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translations JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
