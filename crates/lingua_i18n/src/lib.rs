//! Lingua internationalization (i18n)
//!
//! Goals:
//! - An explicit [`Localizer`] instance per application (shareable behind
//!   `Arc`), no process-global singleton
//! - Runtime locale switching with fallback-chain lookup
//!   (`fr-FR` -> `fr` -> `en`)
//! - String catalogs parsed from YAML mappings
//!
//! # Example
//!
//! ```rust
//! use lingua_i18n::Localizer;
//!
//! let localizer = Localizer::new("en");
//! localizer
//!     .register_catalog_str("en", "app.title: \"My App\"")
//!     .unwrap();
//!
//! assert_eq!(localizer.get("app.title"), "My App");
//! ```

mod catalog;
mod error;
mod locale;
mod resolver;

pub use catalog::{Catalog, CatalogParseError};
pub use error::I18nError;
pub use locale::{locale_fallback_chain, normalize_locale};
pub use resolver::Localizer;
