//! Language selection dropdown
//!
//! `LanguageSelect` presents the static list of supported locales, marks the
//! active one as selected, and propagates a user-initiated change:
//!
//! 1. retarget the localization resolver,
//! 2. update the application state (which notifies its subscribers),
//! 3. invoke the widget's `on_change` callback.
//!
//! Selecting the code already active is a no-op, and an empty selection
//! (a cleared control) falls back to the default locale.
//!
//! Dependencies are injected explicitly: the widget holds an
//! `Arc<AppState>` and an `Arc<Localizer>` handed to it at construction.

use std::sync::Arc;

use tracing::{debug, warn};

use lingua_core::{AppState, Color, DEFAULT_LOCALE};
use lingua_i18n::Localizer;

use crate::strings::SELECT_LABEL_KEY;
use crate::view::{LanguageSelectView, RenderedOption};

/// A selectable locale: code plus the label shown in the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleOption {
    /// Short locale identifier, unique across the list.
    pub code: &'static str,
    /// Human-readable label, shown verbatim for every locale.
    pub display_name: &'static str,
}

/// The supported locales, in display order.
///
/// Each entry needs a matching catalog in the built-in string table.
pub const SUPPORTED_LOCALES: &[LocaleOption] = &[
    LocaleOption {
        code: "en",
        display_name: "English",
    },
    LocaleOption {
        code: "fr",
        display_name: "French",
    },
    LocaleOption {
        code: "de",
        display_name: "Deutsch",
    },
    LocaleOption {
        code: "nl",
        display_name: "Nederlands",
    },
];

fn is_supported(code: &str) -> bool {
    SUPPORTED_LOCALES.iter().any(|opt| opt.code == code)
}

/// Language select configuration
#[derive(Clone, Debug)]
pub struct LanguageSelectConfig {
    /// Whether to render the descriptive label above the control.
    pub show_label: bool,
    /// Text and icon color.
    pub text_color: Color,
    /// Container background color.
    pub background: Color,
}

impl Default for LanguageSelectConfig {
    fn default() -> Self {
        Self {
            show_label: true,
            text_color: Color::WHITE,
            background: Color::TRANSPARENT,
        }
    }
}

/// Language selection widget
pub struct LanguageSelect {
    config: LanguageSelectConfig,
    app_state: Arc<AppState>,
    localizer: Arc<Localizer>,
    on_change: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl LanguageSelect {
    /// Create a widget with the default config.
    pub fn new(app_state: Arc<AppState>, localizer: Arc<Localizer>) -> Self {
        Self::with_config(app_state, localizer, LanguageSelectConfig::default())
    }

    /// Create a widget with a custom config.
    pub fn with_config(
        app_state: Arc<AppState>,
        localizer: Arc<Localizer>,
        config: LanguageSelectConfig,
    ) -> Self {
        Self {
            config,
            app_state,
            localizer,
            on_change: None,
        }
    }

    /// Set the change callback, invoked once per accepted selection.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// The code shown as selected: the active locale, or the default when
    /// the state holds an empty value.
    fn selected_code(&self) -> String {
        let active = self.app_state.active_locale();
        if active.is_empty() {
            DEFAULT_LOCALE.to_string()
        } else {
            active
        }
    }

    /// Build the widget's view projection from the current state.
    ///
    /// The resolver is synced to the active locale first, so the label always
    /// resolves in the locale being displayed.
    pub fn build(&self) -> LanguageSelectView {
        let selected = self.selected_code();
        self.localizer.set_current_locale(&selected);

        let label = self
            .config
            .show_label
            .then(|| self.localizer.get(SELECT_LABEL_KEY));

        let options = SUPPORTED_LOCALES
            .iter()
            .map(|opt| RenderedOption {
                code: opt.code,
                display_name: opt.display_name,
                selected: opt.code == selected,
            })
            .collect();

        LanguageSelectView {
            label,
            options,
            selected_code: selected,
            text_color: self.config.text_color,
            background: self.config.background,
        }
    }

    /// Handle a selection change from the user.
    ///
    /// Re-selecting the active locale does nothing. An empty selection falls
    /// back to the default locale. Codes outside [`SUPPORTED_LOCALES`] are
    /// passed through unvalidated (logged, not rejected).
    pub fn handle_change(&self, new_code: &str) {
        let active = self.app_state.active_locale();
        if new_code == active {
            return;
        }

        let effective = if new_code.is_empty() {
            DEFAULT_LOCALE
        } else {
            new_code
        };

        if !is_supported(effective) {
            warn!("LanguageSelect: `{effective}` is not in the supported locale list");
        }
        debug!("LanguageSelect: {active} -> {effective}");

        self.localizer.set_current_locale(effective);
        self.app_state.set_active_locale(effective);

        if let Some(ref callback) = self.on_change {
            callback(effective);
        }
    }
}

/// Create a language select with its injected collaborators.
pub fn language_select(
    app_state: Arc<AppState>,
    localizer: Arc<Localizer>,
) -> LanguageSelectBuilder {
    LanguageSelectBuilder {
        config: LanguageSelectConfig::default(),
        app_state,
        localizer,
        on_change: None,
    }
}

/// Builder for creating language selects with a fluent API
pub struct LanguageSelectBuilder {
    config: LanguageSelectConfig,
    app_state: Arc<AppState>,
    localizer: Arc<Localizer>,
    on_change: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl LanguageSelectBuilder {
    /// Show or hide the label above the control.
    pub fn show_label(mut self, show: bool) -> Self {
        self.config.show_label = show;
        self
    }

    /// Set the text and icon color.
    pub fn text_color(mut self, color: impl Into<Color>) -> Self {
        self.config.text_color = color.into();
        self
    }

    /// Set the container background color.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.config.background = color.into();
        self
    }

    /// Set the change callback.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Build the widget.
    pub fn build(self) -> LanguageSelect {
        let mut widget =
            LanguageSelect::with_config(self.app_state, self.localizer, self.config);
        widget.on_change = self.on_change;
        widget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::register_builtin_strings;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    fn fixture(initial_locale: &str) -> (Arc<AppState>, Arc<Localizer>) {
        let state = Arc::new(AppState::new(initial_locale));
        let localizer = Arc::new(Localizer::new(initial_locale));
        register_builtin_strings(&localizer).unwrap();
        (state, localizer)
    }

    fn recording_callback() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls_for_cb = Arc::clone(&calls);
        let cb = move |code: &str| calls_for_cb.lock().unwrap().push(code.to_string());
        (calls, cb)
    }

    #[test]
    fn selecting_active_locale_is_a_no_op() {
        let (state, localizer) = fixture("de");
        let (calls, cb) = recording_callback();
        let notified = Arc::new(Mutex::new(Vec::new()));

        let notified_for_sub = Arc::clone(&notified);
        state.subscribe(move |code| notified_for_sub.lock().unwrap().push(code.to_string()));

        let selector = language_select(state.clone(), localizer)
            .on_change(cb)
            .build();
        selector.handle_change("de");

        assert_eq!(state.active_locale(), "de");
        assert!(calls.lock().unwrap().is_empty());
        assert!(notified.lock().unwrap().is_empty());
    }

    #[test]
    fn empty_selection_falls_back_to_default() {
        let (state, localizer) = fixture("nl");
        let (calls, cb) = recording_callback();

        let selector = language_select(state.clone(), localizer.clone())
            .on_change(cb)
            .build();
        selector.handle_change("");

        assert_eq!(state.active_locale(), "en");
        assert_eq!(localizer.current_locale(), "en");
        assert_eq!(*calls.lock().unwrap(), vec!["en".to_string()]);
    }

    #[test]
    fn selection_updates_state_resolver_and_callback() {
        let (state, localizer) = fixture("en");
        let (calls, cb) = recording_callback();

        let selector = language_select(state.clone(), localizer.clone())
            .on_change(cb)
            .build();
        selector.handle_change("fr");

        assert_eq!(state.active_locale(), "fr");
        assert_eq!(localizer.current_locale(), "fr");
        assert_eq!(*calls.lock().unwrap(), vec!["fr".to_string()]);

        let view = selector.build();
        assert_eq!(view.label.as_deref(), Some("Langue"));
        assert_eq!(view.selected_code, "fr");
    }

    #[test]
    fn label_round_trips_for_every_locale() {
        let expected = [
            ("en", "Language"),
            ("fr", "Langue"),
            ("de", "Sprache"),
            ("nl", "Taal"),
        ];

        let (state, localizer) = fixture("en");
        let selector = LanguageSelect::new(state.clone(), localizer);

        for (code, label) in expected {
            state.set_active_locale(code);
            let view = selector.build();
            assert_eq!(view.label.as_deref(), Some(label));
        }
    }

    #[test]
    fn options_are_complete_and_ordered() {
        let (state, localizer) = fixture("de");
        let selector = LanguageSelect::new(state, localizer);

        let view = selector.build();
        let rendered: Vec<_> = view
            .options
            .iter()
            .map(|opt| (opt.code, opt.display_name))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("en", "English"),
                ("fr", "French"),
                ("de", "Deutsch"),
                ("nl", "Nederlands"),
            ]
        );
        assert_eq!(view.selected_option().map(|opt| opt.code), Some("de"));
    }

    #[test]
    fn label_visibility_follows_config() {
        let (state, localizer) = fixture("en");

        let hidden = language_select(state.clone(), localizer.clone())
            .show_label(false)
            .build();
        assert_eq!(hidden.build().label, None);

        let shown = language_select(state, localizer).show_label(true).build();
        assert_eq!(shown.build().label.as_deref(), Some("Language"));
    }

    #[test]
    fn unlisted_code_passes_through() {
        let (state, localizer) = fixture("en");
        let (calls, cb) = recording_callback();

        let selector = language_select(state.clone(), localizer)
            .on_change(cb)
            .build();
        selector.handle_change("xx");

        assert_eq!(state.active_locale(), "xx");
        assert_eq!(*calls.lock().unwrap(), vec!["xx".to_string()]);
    }

    #[test]
    fn state_change_is_reflected_on_rebuild() {
        let (state, localizer) = fixture("en");
        let selector = LanguageSelect::new(state.clone(), localizer);

        assert_eq!(selector.build().selected_code, "en");
        state.set_active_locale("nl");
        assert_eq!(selector.build().selected_code, "nl");
    }

    #[test]
    fn theme_colors_are_carried_into_the_view() {
        let (state, localizer) = fixture("en");
        let selector = language_select(state, localizer)
            .text_color(Color::BLACK)
            .background(Color::from_hex(0x336699))
            .build();

        let view = selector.build();
        assert_eq!(view.text_color, Color::BLACK);
        assert_eq!(view.background, Color::from_hex(0x336699));
    }
}
