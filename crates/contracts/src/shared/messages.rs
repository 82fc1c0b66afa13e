//! Message keys of the form `${key}`

use std::collections::HashMap;

/// Inner key of `${key}`; any other text is returned unchanged
pub fn unwrap_key(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .map(str::trim)
        .unwrap_or(raw)
}

pub fn is_key(raw: &str) -> bool {
    unwrap_key(raw) != raw
}

/// Flat key → text map used as the text resolver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text for `${key}` literals; unknown keys resolve to the bare key,
    /// plain text passes through
    pub fn resolve(&self, raw: &str) -> String {
        if !is_key(raw) {
            return raw.to_string();
        }
        let key = unwrap_key(raw);
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_only_wrapped_keys() {
        assert_eq!(unwrap_key("${field.title.code}"), "field.title.code");
        assert_eq!(unwrap_key(" ${ a.b } "), "a.b");
        assert_eq!(unwrap_key("Code"), "Code");
        assert_eq!(unwrap_key("${unterminated"), "${unterminated");
    }

    #[test]
    fn catalog_resolves_known_keys_and_falls_back_to_key() {
        let mut catalog = MessageCatalog::default();
        catalog.insert("section.title.catalogs", "Catalogs");
        assert_eq!(catalog.resolve("${section.title.catalogs}"), "Catalogs");
        assert_eq!(catalog.resolve("${section.title.unknown}"), "section.title.unknown");
        assert_eq!(catalog.resolve("Plain"), "Plain");
    }
}
