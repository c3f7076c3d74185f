use std::collections::HashMap;

use thiserror::Error;

const MAX_CATALOG_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

/// A string catalog for one locale: key -> translated text.
///
/// Parsed from a flat YAML mapping:
///
/// ```yaml
/// app.title: "My App"
/// LANGUAGESELECT_SELECT_LABEL: "Language"
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a flat YAML mapping of string keys to string values.
    pub fn parse(src: &str) -> Result<Self, CatalogParseError> {
        let raw = match serde_yaml::from_str::<serde_yaml::Value>(src) {
            Ok(serde_yaml::Value::Mapping(raw)) => raw,
            Ok(_) => return Err(CatalogParseError::NotAMapping),
            Err(e) => return Err(CatalogParseError::Yaml(e.to_string())),
        };

        if raw.len() > MAX_CATALOG_ENTRIES {
            return Err(CatalogParseError::TooManyEntries {
                max: MAX_CATALOG_ENTRIES,
            });
        }

        let mut cat = Self::new();
        for (k, v) in raw {
            let Some(key) = k.as_str() else {
                return Err(CatalogParseError::NonStringKey);
            };
            if !is_valid_key(key) {
                return Err(CatalogParseError::InvalidKey(key.to_string()));
            }
            if key.len() > MAX_KEY_BYTES {
                return Err(CatalogParseError::KeyTooLong {
                    key: key.to_string(),
                    max: MAX_KEY_BYTES,
                });
            }
            let Some(val) = v.as_str() else {
                return Err(CatalogParseError::NonStringValue {
                    key: key.to_string(),
                });
            };
            if val.len() > MAX_VALUE_BYTES {
                return Err(CatalogParseError::ValueTooLong {
                    key: key.to_string(),
                    max: MAX_VALUE_BYTES,
                });
            }
            cat.insert(key, val);
        }
        Ok(cat)
    }
}

#[derive(Debug, Error)]
pub enum CatalogParseError {
    #[error("catalog source is not a yaml mapping")]
    NotAMapping,

    #[error("yaml parse error: {0}")]
    Yaml(String),

    #[error("yaml keys must be strings")]
    NonStringKey,

    #[error("invalid key `{0}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*)")]
    InvalidKey(String),

    #[error("key `{key}` is too long (max {max} bytes)")]
    KeyTooLong { key: String, max: usize },

    #[error("yaml value for key `{key}` must be a string")]
    NonStringValue { key: String },

    #[error("value for key `{key}` is too long (max {max} bytes)")]
    ValueTooLong { key: String, max: usize },

    #[error("too many entries (max {max})")]
    TooManyEntries { max: usize },
}
