//! Render projections produced by widgets
//!
//! Widgets in this crate stop at a backend-agnostic view description; the
//! embedding application maps it onto its rendering layer.

use lingua_core::Color;

/// One dropdown entry as rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedOption {
    /// Locale code carried as the option's value.
    pub code: &'static str,
    /// Human-readable label shown for the option.
    pub display_name: &'static str,
    /// Whether this option is the selected one.
    pub selected: bool,
}

/// The language dropdown as rendered: optional label, options in display
/// order, and the theme colors to paint with.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageSelectView {
    /// Localized label above the control, when enabled.
    pub label: Option<String>,
    /// Options in display order; exactly one is selected.
    pub options: Vec<RenderedOption>,
    /// Code of the selected option.
    pub selected_code: String,
    /// Text and icon color.
    pub text_color: Color,
    /// Container background color.
    pub background: Color,
}

impl LanguageSelectView {
    /// The selected option entry.
    pub fn selected_option(&self) -> Option<&RenderedOption> {
        self.options.iter().find(|opt| opt.selected)
    }
}
