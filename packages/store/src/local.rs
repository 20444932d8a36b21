//! # localStorage credential store: browser-side persistence
//!
//! [`LocalStore`] is the [`CredentialStore`] used on the **web platform**. It
//! keeps the token and user id as two plain string entries in the origin's
//! `localStorage`:
//!
//! | Key | Value |
//! |-----|-------|
//! | `"token"` | bearer token |
//! | `"userId"` | id of the signed-in user |
//!
//! The handle is looked up on every call; `window.localStorage` is cheap to
//! fetch and may be unavailable (private mode, sandboxed iframes), in which
//! case reads return no credentials and writes do nothing.

use web_sys::Storage;

use crate::credentials::{CredentialStore, Credentials, TOKEN_KEY, USER_ID_KEY};

/// localStorage-backed CredentialStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl CredentialStore for LocalStore {
    fn load(&self) -> Credentials {
        let Some(storage) = Self::storage() else {
            return Credentials::default();
        };
        Credentials {
            token: storage.get_item(TOKEN_KEY).ok().flatten(),
            user_id: storage.get_item(USER_ID_KEY).ok().flatten(),
        }
    }

    fn save(&self, credentials: &Credentials) {
        let Some(storage) = Self::storage() else {
            return;
        };
        for (key, value) in [(TOKEN_KEY, &credentials.token), (USER_ID_KEY, &credentials.user_id)] {
            match value {
                Some(v) => {
                    let _ = storage.set_item(key, v);
                }
                None => {
                    let _ = storage.remove_item(key);
                }
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_ID_KEY);
        }
    }
}
