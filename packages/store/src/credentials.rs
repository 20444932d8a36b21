//! # Persisted identity: the token and user id of the signed-in user
//!
//! The client keeps exactly two pieces of identity state between page loads:
//! the bearer token returned by `POST /api/auth/login` and the id of the user
//! it belongs to. [`Credentials`] is that pair; [`CredentialStore`] is the
//! persistence seam behind it.
//!
//! ## Lifecycle
//!
//! | Step | Store call |
//! |------|-----------|
//! | App start (auth context created) | [`CredentialStore::load`] |
//! | Successful login | [`CredentialStore::save`] |
//! | Logout / rejected token | [`CredentialStore::clear`] |
//!
//! ## Backends
//!
//! | Type | Platform | Where |
//! |------|----------|-------|
//! | [`crate::MemoryStore`] | any | process memory (tests) |
//! | `FileStore` | native | `<dir>/credentials.toml` |
//! | `LocalStore` | wasm + `web` | `localStorage` keys `token` / `userId` |
//!
//! Backends never fail loudly: an unreadable or unavailable storage area is
//! treated as "nobody is signed in".

use serde::{Deserialize, Serialize};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the signed-in user's id.
pub const USER_ID_KEY: &str = "userId";

/// Identity state persisted across page loads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Credentials {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user_id: Some(user_id.into()),
        }
    }

    /// Whether a token is held. Presence only; the token is never inspected.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Whether `owner_id` names the signed-in user.
    pub fn is_user(&self, owner_id: &str) -> bool {
        self.user_id.as_deref() == Some(owner_id)
    }
}

/// Persistence for [`Credentials`].
pub trait CredentialStore {
    fn load(&self) -> Credentials;
    fn save(&self, credentials: &Credentials);
    fn clear(&self);
}
