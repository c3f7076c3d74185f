//! Application state container
//!
//! `AppState` owns the single source of truth for the active locale. Widgets
//! read it during render and mutate it through `set_active_locale`, the only
//! write path. Interested parties (usually the app layer, to trigger a
//! rebuild) subscribe to change notifications instead of polling.
//!
//! The container is an explicit, shareable instance rather than a process
//! global: construct it once at startup and hand an `Arc<AppState>` to the
//! widgets that need it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};

use tracing::debug;

/// Locale used when the active locale is empty or never set.
pub const DEFAULT_LOCALE: &str = "en";

/// Handle returned by [`AppState::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&str) + Send + Sync>;

/// Application state holding the active locale.
pub struct AppState {
    active_locale: RwLock<String>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
}

impl AppState {
    /// Create a new state container.
    ///
    /// An empty initial locale falls back to [`DEFAULT_LOCALE`].
    pub fn new(initial_locale: impl Into<String>) -> Self {
        let initial = initial_locale.into();
        let initial = if initial.is_empty() {
            DEFAULT_LOCALE.to_string()
        } else {
            initial
        };

        Self {
            active_locale: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Get the active locale code.
    pub fn active_locale(&self) -> String {
        self.active_locale.read().unwrap().clone()
    }

    /// Set the active locale, notifying subscribers on change.
    ///
    /// Setting the value already active is a no-op: no write, no
    /// notifications. Subscribers run synchronously on the caller's thread
    /// and must not call [`subscribe`](Self::subscribe) or
    /// [`unsubscribe`](Self::unsubscribe) re-entrantly.
    pub fn set_active_locale(&self, code: impl Into<String>) {
        let code = code.into();

        {
            let mut cur = self.active_locale.write().unwrap();
            if *cur == code {
                return;
            }
            debug!("AppState::set_active_locale: {} -> {}", *cur, code);
            *cur = code.clone();
        }

        let subscribers = self.subscribers.lock().unwrap();
        for (_, notify) in subscribers.iter() {
            notify(&code);
        }
    }

    /// Register a change subscriber, invoked with the new locale code after
    /// every accepted change.
    pub fn subscribe<F>(&self, on_change: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .unwrap()
            .push((id, Box::new(on_change)));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .lock()
            .unwrap()
            .retain(|(sub_id, _)| *sub_id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn empty_initial_locale_falls_back_to_default() {
        let state = AppState::new("");
        assert_eq!(state.active_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn set_and_read_back() {
        let state = AppState::new("en");
        state.set_active_locale("de");
        assert_eq!(state.active_locale(), "de");
    }

    #[test]
    fn subscribers_are_notified_once_per_change() {
        let state = AppState::new("en");
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_for_sub = Arc::clone(&calls);
        state.subscribe(move |code| {
            assert_eq!(code, "fr");
            calls_for_sub.fetch_add(1, Ordering::SeqCst);
        });

        state.set_active_locale("fr");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn setting_same_value_does_not_notify() {
        let state = AppState::new("de");
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_for_sub = Arc::clone(&calls);
        state.subscribe(move |_| {
            calls_for_sub.fetch_add(1, Ordering::SeqCst);
        });

        state.set_active_locale("de");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let state = AppState::new("en");
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_for_sub = Arc::clone(&calls);
        let id = state.subscribe(move |_| {
            calls_for_sub.fetch_add(1, Ordering::SeqCst);
        });

        state.set_active_locale("fr");
        state.unsubscribe(id);
        state.set_active_locale("nl");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
