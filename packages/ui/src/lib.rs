//! This crate contains all shared UI for the workspace: the views, the auth
//! context, and the client-side logic they are built on.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`views`] | Page components, parameterised by a navigation callback |
//! | [`flows`] | Login, submit, delete and registration sequences over [`api::EventsApi`] |
//! | [`forms`] | Typed form state and event validation |
//! | [`listing`] | Load state, pagination, registration counts |
//! | [`display`] | Initials, capacity bars, date strings |
//! | [`navigation`] | [`Destination`] and the route guard decision |
//! | [`notify`] | [`Notifier`]: confirmations and alerts |

pub mod access;
pub mod display;
pub mod flows;
pub mod forms;
pub mod listing;
pub mod navigation;
pub mod notify;
pub mod views;

mod auth;
pub use auth::{
    expire_if_unauthorized, sign_in, sign_out, use_auth, use_client, use_config, AuthProvider, AuthState,
    LogoutButton,
};

mod platform;
pub use platform::{load_client_config, make_credential_store, sleep_ms};

pub use navigation::{guard_decision, Destination, GuardDecision};
pub use notify::{BrowserNotifier, Notifier, NotifyLevel};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

#[cfg(test)]
mod test_support;
