//! # User-facing account types
//!
//! The backend never sends a full user record to the client. What it does send:
//!
//! - [`User`]: the `{ _id, name, email }` projection embedded in registration
//!   listings.
//! - [`UserRef`]: a reference that is either a bare id or a populated
//!   [`User`], depending on whether the endpoint populated the relation.
//! - [`LoginRequest`] / [`SignupRequest`]: request bodies for the auth endpoints.
//! - [`LoginResponse`]: the token and user id returned by a successful login,
//!   convertible into [`store::Credentials`].

use serde::{Deserialize, Serialize};
use store::Credentials;

/// Client-visible user fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A user relation: bare id or populated document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    Populated(User),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            UserRef::Id(id) => id,
            UserRef::Populated(user) => &user.id,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            UserRef::Id(_) => None,
            UserRef::Populated(user) => Some(user),
        }
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "_id", alias = "id")]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginResponse {
    /// The identity state to persist for this session.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.token.clone(), self.user_id.clone())
    }
}
