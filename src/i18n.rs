//! Key-to-text lookup for user-facing strings.
//!
//! Keys are the English source text. A key without a configured override is
//! displayed as-is.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Translator {
    strings: HashMap<String, String>,
}

impl Translator {
    pub fn new(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }
}
