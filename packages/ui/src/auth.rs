//! Authentication context and hooks for the UI.
//!
//! The signed-in identity lives in one `Signal<AuthState>` provided at the
//! root. It is loaded from the platform [`CredentialStore`] once on mount,
//! replaced on login and reset on logout or when the backend rejects the
//! token. One base [`ApiClient`] (and with it one connection pool) is created
//! alongside it; views get a copy carrying the current token from
//! [`use_client`].

use api::{ApiClient, RequestError};
use dioxus::prelude::*;
use store::{ClientConfig, CredentialStore, Credentials};

use crate::flows;
use crate::notify::BrowserNotifier;
use crate::platform::{load_client_config, make_credential_store};

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub credentials: Credentials,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.credentials.user_id.as_deref()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The client configuration provided by [`AuthProvider`].
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// An API client for the configured backend, carrying the current token.
pub fn use_client() -> ApiClient {
    let auth = use_auth();
    let base = use_context::<ApiClient>();
    client_for(&base, &auth())
}

/// The shared client acting as `state`'s identity.
pub(crate) fn client_for(base: &ApiClient, state: &AuthState) -> ApiClient {
    base.clone().with_token(state.credentials.token.clone())
}

/// Provider component that loads configuration and the persisted identity.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context_provider(load_client_config);
    use_context_provider(|| ApiClient::new(config.api.base_url.clone()));
    let auth_state = use_signal(|| AuthState {
        credentials: make_credential_store().load(),
    });
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Adopt freshly persisted credentials.
pub fn sign_in(auth: &mut Signal<AuthState>, credentials: Credentials) {
    auth.set(AuthState { credentials });
}

/// Forget the identity in memory only; the store is handled by the caller.
pub fn sign_out(auth: &mut Signal<AuthState>) {
    auth.set(AuthState::default());
}

/// Handle a 401 from a data load: forget the token everywhere. Returns
/// whether the error was a rejection, in which case the view should go to
/// login.
pub fn expire_if_unauthorized(auth: &mut Signal<AuthState>, error: &RequestError) -> bool {
    if !error.is_unauthorized() {
        return false;
    }
    tracing::warn!("Token rejected by the backend, signing out");
    make_credential_store().clear();
    sign_out(auth);
    true
}

/// Button to log out the current user after confirmation.
#[component]
pub fn LogoutButton(
    on_logged_out: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        if flows::confirm_logout(&make_credential_store(), &BrowserNotifier) {
            sign_out(&mut auth_state);
            on_logged_out.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
