// SPDX-License-Identifier: MIT

//! Translation session: active language + dictionary + language store.
//!
//! The session is the single owner of the mutable active-language field.
//! It is created once from a fallback language and a dictionary, mutated
//! only through [`Session::set_language`], and dropped when the owning
//! scope ends. Single-threaded by design — the host is assumed to be a
//! synchronous event loop, so no locking is applied.

use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::store::{LanguageStore, LANGUAGE_KEY};
use tracing::warn;

/// Behavioral switches fixed at initialization time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Log a warning whenever a key resolves to the miss sentinel.
    pub dev_mode: bool,
    /// Strip the `_`/`*` fallback markers from every resolved value, so
    /// misses surface as the raw key instead of `_key_`.
    pub disable_default_fallback: bool,
}

pub struct Session {
    language: String,
    dictionary: Dictionary,
    available_languages: Vec<String>,
    options: SessionOptions,
    store: Box<dyn LanguageStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("language", &self.language)
            .field("dictionary", &self.dictionary)
            .field("available_languages", &self.available_languages)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Construct session state from a fallback language and a dictionary.
    ///
    /// The active language is the persisted value if the store has one and
    /// it names a language present in the dictionary; otherwise the
    /// fallback. Fails with [`Error::Config`] if the dictionary is empty
    /// or the fallback language is not among its top-level keys.
    pub fn initialize(
        fallback_language: &str,
        dictionary: Dictionary,
        options: SessionOptions,
        store: Box<dyn LanguageStore>,
    ) -> Result<Self, Error> {
        if dictionary.is_empty() {
            return Err(Error::Config("translation dictionary is empty".into()));
        }
        if !dictionary.contains_language(fallback_language) {
            return Err(Error::Config(format!(
                "fallback language {fallback_language:?} is not present in the dictionary"
            )));
        }

        let language = match store.get(LANGUAGE_KEY) {
            Some(code) if dictionary.contains_language(&code) => code,
            Some(code) => {
                warn!(persisted = %code, fallback = %fallback_language,
                    "persisted language not in dictionary, using fallback");
                fallback_language.to_string()
            }
            None => fallback_language.to_string(),
        };

        // Captured once; not recomputed on language change.
        let available_languages = dictionary.languages().to_vec();

        Ok(Self {
            language,
            dictionary,
            available_languages,
            options,
            store,
        })
    }

    /// Switch the active language and persist the choice.
    ///
    /// Fails with [`Error::InvalidLanguage`] (state unchanged) if `code`
    /// is not among the available languages. The store write happens
    /// synchronously after the in-memory update; a write failure is
    /// logged rather than rolling the session back.
    pub fn set_language(&mut self, code: &str) -> Result<(), Error> {
        if !self.available_languages.iter().any(|lang| lang == code) {
            return Err(Error::InvalidLanguage(code.to_string()));
        }
        self.language = code.to_string();
        if let Err(err) = self.store.set(LANGUAGE_KEY, code) {
            warn!(language = %code, error = %err, "failed to persist language selection");
        }
        Ok(())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The language set derived from the dictionary at initialization.
    pub fn available_languages(&self) -> &[String] {
        &self.available_languages
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// What the store currently holds under the language key.
    pub fn persisted_language(&self) -> Option<String> {
        self.store.get(LANGUAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn dictionary() -> Dictionary {
        Dictionary::from_json(&json!({
            "en-US": { "greeting": "Hello" },
            "es-MX": { "greeting": "Hola" }
        }))
        .unwrap()
    }

    fn store_with(language: &str) -> Box<MemoryStore> {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, language).unwrap();
        Box::new(store)
    }

    #[test]
    fn initialize_uses_fallback_when_store_is_empty() {
        let session = Session::initialize(
            "en-US",
            dictionary(),
            SessionOptions::default(),
            Box::new(MemoryStore::new()),
        )
        .unwrap();
        assert_eq!(session.language(), "en-US");
        assert_eq!(
            session.available_languages(),
            ["en-US".to_string(), "es-MX".to_string()]
        );
    }

    #[test]
    fn initialize_prefers_valid_persisted_language() {
        let session = Session::initialize(
            "en-US",
            dictionary(),
            SessionOptions::default(),
            store_with("es-MX"),
        )
        .unwrap();
        assert_eq!(session.language(), "es-MX");
    }

    #[test]
    fn initialize_ignores_unknown_persisted_language() {
        let session = Session::initialize(
            "en-US",
            dictionary(),
            SessionOptions::default(),
            store_with("fr-FR"),
        )
        .unwrap();
        assert_eq!(session.language(), "en-US");
    }

    #[test]
    fn initialize_rejects_empty_dictionary() {
        let err = Session::initialize(
            "en-US",
            Dictionary::default(),
            SessionOptions::default(),
            Box::new(MemoryStore::new()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn initialize_rejects_unknown_fallback() {
        let err = Session::initialize(
            "de-DE",
            dictionary(),
            SessionOptions::default(),
            Box::new(MemoryStore::new()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn set_language_updates_state_and_persists() {
        let mut session = Session::initialize(
            "en-US",
            dictionary(),
            SessionOptions::default(),
            Box::new(MemoryStore::new()),
        )
        .unwrap();
        session.set_language("es-MX").unwrap();
        assert_eq!(session.language(), "es-MX");
        assert_eq!(session.persisted_language(), Some("es-MX".to_string()));
    }

    #[test]
    fn set_language_is_idempotent() {
        let mut session = Session::initialize(
            "en-US",
            dictionary(),
            SessionOptions::default(),
            Box::new(MemoryStore::new()),
        )
        .unwrap();
        session.set_language("es-MX").unwrap();
        session.set_language("es-MX").unwrap();
        assert_eq!(session.language(), "es-MX");
        assert_eq!(session.persisted_language(), Some("es-MX".to_string()));
    }

    #[test]
    fn set_language_rejects_unknown_code_and_leaves_state() {
        let mut session = Session::initialize(
            "en-US",
            dictionary(),
            SessionOptions::default(),
            Box::new(MemoryStore::new()),
        )
        .unwrap();
        let err = session.set_language("fr-FR").unwrap_err();
        assert!(matches!(err, Error::InvalidLanguage(code) if code == "fr-FR"));
        assert_eq!(session.language(), "en-US");
        assert_eq!(session.persisted_language(), None);
    }

    #[test]
    fn available_languages_not_recomputed_on_change() {
        let mut session = Session::initialize(
            "en-US",
            dictionary(),
            SessionOptions::default(),
            Box::new(MemoryStore::new()),
        )
        .unwrap();
        let before = session.available_languages().to_vec();
        session.set_language("es-MX").unwrap();
        assert_eq!(session.available_languages(), &before[..]);
    }
}
