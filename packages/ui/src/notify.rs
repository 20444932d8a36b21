//! Blocking confirmations and user-facing notifications.
//!
//! Views never call `window.confirm` / `window.alert` directly; they go
//! through a [`Notifier`] so the action flows in [`crate::flows`] can be
//! exercised with a recording fake.

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Success,
    Warning,
    Error,
}

pub trait Notifier {
    /// Ask a yes/no question. `false` means the user declined.
    fn confirm(&self, prompt: &str) -> bool;
    fn notify(&self, message: &str, level: NotifyLevel);
}

/// `window.confirm` / `window.alert` in the browser. Elsewhere there is no
/// dialog: prompts are accepted and messages only logged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn confirm(&self, prompt: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(prompt).ok())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("Confirmed without a dialog: {}", prompt);
            true
        }
    }

    fn notify(&self, message: &str, level: NotifyLevel) {
        match level {
            NotifyLevel::Error => tracing::error!("{}", message),
            NotifyLevel::Warning => tracing::warn!("{}", message),
            NotifyLevel::Info | NotifyLevel::Success => tracing::info!("{}", message),
        }

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::flows::{confirm_logout, LOGOUT_PROMPT};
    use store::{CredentialStore, Credentials, MemoryStore};

    #[test]
    fn test_native_confirm_accepts() {
        assert!(BrowserNotifier.confirm(LOGOUT_PROMPT));
    }

    #[test]
    fn test_native_logout_goes_through() {
        let store = MemoryStore::new();
        store.save(&Credentials::new("jwt", "u1"));
        assert!(confirm_logout(&store, &BrowserNotifier));
        assert!(!store.load().is_authenticated());
    }
}
