//! # Filesystem-backed credential store
//!
//! [`FileStore`] persists [`Credentials`] as a small TOML file for native
//! builds (and native test runs), where `localStorage` does not exist.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── credentials.toml   # token = "...", userId = "..."
//! ```
//!
//! Use `dirs::data_dir()` joined with the application name as the base.

use std::path::PathBuf;

use crate::credentials::{CredentialStore, Credentials};

const CREDENTIALS_FILE: &str = "credentials.toml";

/// Filesystem-backed CredentialStore for native platforms.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self) -> PathBuf {
        self.base.join(CREDENTIALS_FILE)
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Credentials {
        std::fs::read_to_string(self.path())
            .ok()
            .and_then(|raw| toml::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, credentials: &Credentials) {
        let Ok(raw) = toml::to_string(credentials) else {
            return;
        };
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.path(), raw);
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.path());
    }
}
