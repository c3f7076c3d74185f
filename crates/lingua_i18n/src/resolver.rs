use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::catalog::Catalog;
use crate::locale::{locale_fallback_chain, normalize_locale};
use crate::I18nError;

/// Localization resolver: tracks a current locale and resolves string keys
/// against registered catalogs using the locale fallback chain.
///
/// Uses interior mutability so one instance can be shared behind `Arc`
/// between widgets and the app layer.
pub struct Localizer {
    locale: RwLock<String>,
    catalogs: RwLock<HashMap<String, Catalog>>,
}

impl Localizer {
    /// Create a resolver with an initial locale.
    ///
    /// An empty initial locale falls back to `en`.
    pub fn new(locale: impl Into<String>) -> Self {
        let loc = normalize_locale(&locale.into());
        Self {
            locale: RwLock::new(if loc.is_empty() {
                "en".to_string()
            } else {
                loc
            }),
            catalogs: RwLock::new(HashMap::new()),
        }
    }

    /// Get the current locale code.
    pub fn current_locale(&self) -> String {
        self.locale.read().unwrap().clone()
    }

    /// Set the current locale. Empty input is ignored; setting the locale
    /// already current is a no-op.
    pub fn set_current_locale(&self, locale: impl Into<String>) {
        let loc = normalize_locale(&locale.into());
        if loc.is_empty() {
            return;
        }

        let mut cur = self.locale.write().unwrap();
        if *cur == loc {
            return;
        }
        debug!("Localizer::set_current_locale: {} -> {}", *cur, loc);
        *cur = loc;
    }

    /// Register a catalog for a locale, replacing any existing one.
    pub fn register_catalog(&self, locale: &str, catalog: Catalog) {
        let loc = normalize_locale(locale);
        self.catalogs.write().unwrap().insert(loc, catalog);
    }

    /// Parse and register a catalog for a locale from YAML mapping source.
    pub fn register_catalog_str(&self, locale: &str, src: &str) -> Result<(), I18nError> {
        let cat = Catalog::parse(src)?;
        self.register_catalog(locale, cat);
        Ok(())
    }

    /// Whether a catalog is registered for this locale (exact match after
    /// normalization, no fallback).
    pub fn has_locale(&self, locale: &str) -> bool {
        self.catalogs
            .read()
            .unwrap()
            .contains_key(&normalize_locale(locale))
    }

    /// Resolve a string key against the current locale's fallback chain.
    ///
    /// Unresolved keys degrade gracefully by returning the key itself.
    pub fn get(&self, key: &str) -> String {
        let loc = self.current_locale();
        let chain = locale_fallback_chain(&loc);

        let catalogs = self.catalogs.read().unwrap();
        for l in &chain {
            if let Some(cat) = catalogs.get(l) {
                if let Some(s) = cat.get(key) {
                    return s.to_string();
                }
            }
        }

        // Fallback: show the key id.
        key.to_string()
    }
}
