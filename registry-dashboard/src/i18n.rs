//! Translation lookup.
//!
//! The dashboard only ever passes translation keys around; rendering code asks a
//! [`Translator`] for the display string at the last moment.

use std::collections::HashMap;

const EN_CA: &str = include_str!("../locales/en-CA.json");

pub trait Translator: Send + Sync {
    fn t(&self, key: &str) -> String;
    fn locale(&self) -> &str;
}

/// Returns every key unchanged. Useful wherever the key itself is the assertion.
#[derive(Debug, Clone, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }

    fn locale(&self) -> &str {
        "en-CA"
    }
}

/// Flat key → message catalog built from a nested JSON document.
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
    locale: String,
    messages: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn from_json(locale: &str, source: &str) -> Result<Self, serde_json::Error> {
        let document: serde_json::Value = serde_json::from_str(source)?;
        let mut messages = HashMap::new();
        flatten("", &document, &mut messages);

        Ok(Self {
            locale: locale.to_string(),
            messages,
        })
    }

    /// Bundled Canadian English catalog.
    pub fn en_ca() -> Result<Self, serde_json::Error> {
        Self::from_json("en-CA", EN_CA)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for CatalogTranslator {
    fn t(&self, key: &str) -> String {
        match self.messages.get(key) {
            Some(message) => message.clone(),
            None => {
                tracing::debug!(locale = %self.locale, key, "Missing translation");
                key.to_string()
            }
        }
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}

fn flatten(prefix: &str, value: &serde_json::Value, out: &mut HashMap<String, String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, out);
            }
        }
        serde_json::Value::String(message) => {
            out.insert(prefix.to_string(), message.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = CatalogTranslator::en_ca().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.locale(), "en-CA");
        assert_eq!(catalog.t("btn.close"), "Close");
    }

    #[test]
    fn test_nested_keys_are_flattened() {
        let catalog =
            CatalogTranslator::from_json("fr-CA", r#"{"btn": {"ok": "D'accord"}}"#).unwrap();
        assert_eq!(catalog.t("btn.ok"), "D'accord");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let catalog = CatalogTranslator::from_json("en-CA", "{}").unwrap();
        assert_eq!(catalog.t("error.unknown"), "error.unknown");
    }
}
