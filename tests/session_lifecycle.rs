// SPDX-License-Identifier: MIT

//! Session lifecycle against the file-backed language store.

use lingo::dictionary::Dictionary;
use lingo::session::{Session, SessionOptions};
use lingo::store::{FileStore, LanguageStore, LANGUAGE_KEY};
use serde_json::json;

fn dictionary() -> Dictionary {
    Dictionary::from_json(&json!({
        "en-US": { "greeting": "Hello", "navbar": { "home": "Home" } },
        "es-MX": { "greeting": "Hola", "navbar": { "home": "Inicio" } }
    }))
    .expect("dictionary should parse")
}

#[test]
fn language_selection_survives_reinitialization() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state_path = dir.path().join("lingo-state");

    let mut session = Session::initialize(
        "en-US",
        dictionary(),
        SessionOptions::default(),
        Box::new(FileStore::new(&state_path)),
    )
    .expect("initialize");
    assert_eq!(session.language(), "en-US");

    session.set_language("es-MX").expect("valid switch");
    assert_eq!(session.resolve("greeting").expect("resolve"), "Hola");
    drop(session);

    // A new session over the same store picks up the persisted choice.
    let restored = Session::initialize(
        "en-US",
        dictionary(),
        SessionOptions::default(),
        Box::new(FileStore::new(&state_path)),
    )
    .expect("reinitialize");
    assert_eq!(restored.language(), "es-MX");
    assert_eq!(restored.resolve("navbar.home").expect("resolve"), "Inicio");
}

#[test]
fn stale_persisted_language_falls_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state_path = dir.path().join("lingo-state");

    // Persist a language the dictionary no longer carries.
    let mut store = FileStore::new(&state_path);
    store.set(LANGUAGE_KEY, "fr-FR").expect("seed store");

    let session = Session::initialize(
        "en-US",
        dictionary(),
        SessionOptions::default(),
        Box::new(FileStore::new(&state_path)),
    )
    .expect("initialize");
    assert_eq!(session.language(), "en-US");
}

#[test]
fn each_language_change_is_written_through() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state_path = dir.path().join("lingo-state");

    let mut session = Session::initialize(
        "en-US",
        dictionary(),
        SessionOptions::default(),
        Box::new(FileStore::new(&state_path)),
    )
    .expect("initialize");

    session.set_language("es-MX").expect("switch");
    let inspect = FileStore::new(&state_path);
    assert_eq!(inspect.get(LANGUAGE_KEY), Some("es-MX".to_string()));

    session.set_language("en-US").expect("switch back");
    assert_eq!(inspect.get(LANGUAGE_KEY), Some("en-US".to_string()));
}
