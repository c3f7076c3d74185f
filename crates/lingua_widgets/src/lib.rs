//! Lingua Widget Library
//!
//! UI components over explicit application state and localization.
//!
//! The main component is [`LanguageSelect`]: a dropdown that mirrors the
//! active locale held by [`lingua_core::AppState`], lists the supported
//! locales, and on selection updates the state, retargets the
//! [`lingua_i18n::Localizer`], and notifies the app through a callback.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use lingua_core::AppState;
//! use lingua_i18n::Localizer;
//! use lingua_widgets::{language_select, register_builtin_strings};
//!
//! let state = Arc::new(AppState::new("en"));
//! let localizer = Arc::new(Localizer::new("en"));
//! register_builtin_strings(&localizer).unwrap();
//!
//! let selector = language_select(state.clone(), localizer)
//!     .show_label(true)
//!     .on_change(|code| println!("language changed to {code}"))
//!     .build();
//!
//! // The app layer typically subscribes to rebuild on locale changes:
//! // state.subscribe(|_| request_rebuild());
//!
//! let view = selector.build();
//! assert_eq!(view.selected_code, "en");
//!
//! selector.handle_change("fr");
//! assert_eq!(state.active_locale(), "fr");
//! ```

pub mod language_select;
mod strings;
pub mod view;

pub use language_select::{
    language_select, LanguageSelect, LanguageSelectBuilder, LanguageSelectConfig, LocaleOption,
    SUPPORTED_LOCALES,
};
pub use strings::{register_builtin_strings, SELECT_LABEL_KEY};
pub use view::{LanguageSelectView, RenderedOption};
