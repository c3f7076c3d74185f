//! Built-in string table for the widget crate
//!
//! One YAML catalog per supported locale, embedded at compile time. Every
//! locale in [`SUPPORTED_LOCALES`](crate::SUPPORTED_LOCALES) must have an
//! entry for every key used by the widgets.

use lingua_i18n::{I18nError, Localizer};

/// Key for the label rendered above the language dropdown.
pub const SELECT_LABEL_KEY: &str = "LANGUAGESELECT_SELECT_LABEL";

const CATALOGS: &[(&str, &str)] = &[
    ("en", include_str!("../strings/en.yml")),
    ("fr", include_str!("../strings/fr.yml")),
    ("de", include_str!("../strings/de.yml")),
    ("nl", include_str!("../strings/nl.yml")),
];

/// Register the widget string catalogs for all supported locales.
///
/// Call once at startup, before any widget resolves a label.
pub fn register_builtin_strings(localizer: &Localizer) -> Result<(), I18nError> {
    for (locale, src) in CATALOGS {
        localizer.register_catalog_str(locale, src)?;
    }
    Ok(())
}
