// SPDX-License-Identifier: MIT

//! Lingo — localized string sessions, dotted-key resolution, and
//! translation key enum generation.
//!
//! PILLARS:
//! 1. **Session**: owns the active language and the translation
//!    dictionary, validates language switches against the available set,
//!    and persists the selection through a [`store::LanguageStore`].
//! 2. **Resolver**: a pure lookup-and-format function — dotted-path walk
//!    into the nested dictionary, miss sentinel on absent keys, and an
//!    ordered chain of optional string transforms (casing, affixes,
//!    placeholder replacement, conditional mutation).
//! 3. **Enumgen**: flattens a translation tree into generated Rust enum
//!    source mapping flattened key names to their dotted paths.

pub mod coverage;
pub mod dictionary;
pub mod enumgen;
pub mod error;
pub mod flatten;
pub mod resolver;
pub mod session;
pub mod store;
