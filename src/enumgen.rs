// SPDX-License-Identifier: MIT

//! Generates a Rust enum source file mapping flattened translation key
//! names to their dotted lookup paths.
//!
//! The first language in the dictionary drives the key set; by convention
//! all languages share the same keys (the coverage report catches drift).

use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::flatten::{flatten, KeyFormat};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENUM_NAME: &str = "TranslationKeys";
pub const DEFAULT_OUTPUT_DIR: &str = "src/generated";

/// Render the enum source for a dictionary.
pub fn generate_enum(
    dictionary: &Dictionary,
    enum_name: &str,
    format: KeyFormat,
) -> Result<String, Error> {
    let first_language = dictionary
        .languages()
        .first()
        .ok_or_else(|| Error::Config("translation dictionary is empty".into()))?;
    let tree = dictionary
        .tree(first_language)
        .ok_or_else(|| Error::Config("translation dictionary is empty".into()))?;
    let entries = flatten(tree, format);

    let mut source = String::new();
    source.push_str("// Generated file. Do not edit by hand.\n\n");
    source.push_str("/// Flattened translation key names and their dotted lookup paths.\n");
    source.push_str("#[allow(non_camel_case_types)]\n");
    source.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
    source.push_str(&format!("pub enum {enum_name} {{\n"));
    for name in entries.keys() {
        source.push_str(&format!("    {},\n", sanitize_variant(name)));
    }
    source.push_str("}\n\n");

    source.push_str(&format!("impl {enum_name} {{\n"));
    source.push_str("    /// The dotted source path this key resolves through.\n");
    source.push_str("    pub fn path(&self) -> &'static str {\n");
    source.push_str("        match self {\n");
    for (name, path) in &entries {
        source.push_str(&format!(
            "            {enum_name}::{} => \"{path}\",\n",
            sanitize_variant(name)
        ));
    }
    source.push_str("        }\n    }\n}\n");
    Ok(source)
}

/// Generate the enum for a translations JSON file and write it to
/// `<output_dir>/<enum_name>.rs`, creating the directory if needed.
pub fn write_enum(
    translations_path: &Path,
    enum_name: &str,
    format: KeyFormat,
    output_dir: &Path,
) -> Result<PathBuf, Error> {
    let dictionary = Dictionary::from_path(translations_path)?;
    let source = generate_enum(&dictionary, enum_name, format)?;

    fs::create_dir_all(output_dir).map_err(|source| Error::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let output_path = output_dir.join(format!("{enum_name}.rs"));
    fs::write(&output_path, source).map_err(|source| Error::Io {
        path: output_path.clone(),
        source,
    })?;
    Ok(output_path)
}

/// Make a flattened key a legal Rust identifier: non-identifier characters
/// become `_`, and a leading digit gets a `K` prefix.
fn sanitize_variant(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, 'K');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dictionary() -> Dictionary {
        Dictionary::from_json(&json!({
            "en-US": {
                "greeting": "Hello",
                "navbar": { "home": "Home" }
            },
            "es-MX": {
                "greeting": "Hola",
                "navbar": { "home": "Inicio" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn generated_source_contains_variants_and_paths() {
        let source = generate_enum(&dictionary(), "TranslationKeys", KeyFormat::Snake).unwrap();
        assert!(source.contains("pub enum TranslationKeys {"));
        assert!(source.contains("    greeting,\n"));
        assert!(source.contains("    navbar_home,\n"));
        assert!(source.contains("TranslationKeys::navbar_home => \"navbar.home\","));
        assert!(source.contains("TranslationKeys::greeting => \"greeting\","));
    }

    #[test]
    fn pascal_format_recases_variants() {
        let source = generate_enum(&dictionary(), "Keys", KeyFormat::Pascal).unwrap();
        assert!(source.contains("    Navbar_Home,\n"));
        assert!(source.contains("Keys::Navbar_Home => \"navbar.home\","));
    }

    #[test]
    fn empty_dictionary_is_a_config_error() {
        let err = generate_enum(&Dictionary::default(), "Keys", KeyFormat::Snake).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn sanitize_handles_digits_and_punctuation() {
        assert_eq!(sanitize_variant("404_page"), "K404_page");
        assert_eq!(sanitize_variant("weird key"), "weird_key");
        assert_eq!(sanitize_variant("plain"), "plain");
    }
}
