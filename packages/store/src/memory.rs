use std::sync::{Arc, Mutex};

use crate::credentials::{CredentialStore, Credentials};

/// In-memory CredentialStore for testing. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Credentials>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out signed in.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            slot: Arc::new(Mutex::new(credentials)),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Credentials {
        self.slot.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn save(&self, credentials: &Credentials) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = credentials.clone();
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Credentials::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();

        // Initially signed out
        assert_eq!(store.load(), Credentials::default());

        store.save(&Credentials::new("tok", "user-1"));
        let loaded = store.load();
        assert_eq!(loaded.token.as_deref(), Some("tok"));
        assert_eq!(loaded.user_id.as_deref(), Some("user-1"));

        store.clear();
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.save(&Credentials::new("tok", "user-1"));
        assert!(other.load().is_authenticated());
    }
}
