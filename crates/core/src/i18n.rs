// SPDX-License-Identifier: MIT

//!
//! Translation lookup
//!

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A table of translations, keyed by message key.  Looking up a key with no
/// translation gives a visible placeholder rather than an error.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct I18n(HashMap<String, String>);

impl I18n {
    pub fn new(translations: HashMap<String, String>) -> Self {
        Self(translations)
    }

    /// The translation for `key`, or `/i18n:<key>/` if there isn't one (an
    /// empty translation counts as missing)
    pub fn get(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(translation) if !translation.is_empty() => translation.clone(),
            _ => format!("/i18n:{key}/"),
        }
    }

    /// Register (or replace) a translation
    pub fn insert<K: ToString, V: ToString>(&mut self, key: K, value: V) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for I18n {
    fn from(value: HashMap<String, String>) -> Self {
        Self(value)
    }
}
