//! Lingua core
//!
//! Foundational primitives shared by the Lingua widget crates:
//!
//! - **AppState**: the application state container owning the active locale,
//!   with a single mutation entry point and subscription-based change
//!   notification
//! - **Color**: the color value used for widget theming
//!
//! # Example
//!
//! ```rust
//! use lingua_core::AppState;
//!
//! let state = AppState::new("en");
//!
//! let _sub = state.subscribe(|code| {
//!     println!("locale changed to {code}");
//! });
//!
//! state.set_active_locale("fr");
//! assert_eq!(state.active_locale(), "fr");
//! ```

pub mod color;
pub mod state;

pub use color::Color;
pub use state::{AppState, SubscriptionId, DEFAULT_LOCALE};
