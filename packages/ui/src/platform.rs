//! Platform glue: where credentials and configuration live, and timers.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`],
//!   base URL from the compile-time `EVENTS_API_URL`
//! - **Desktop / native tests**: `<data_dir>/events-client/` via
//!   [`store::FileStore`], `client.toml` plus the `EVENTS_API_URL` environment
//!   variable (a `.env` file is honoured)

use std::time::Duration;

use store::{ClientConfig, CredentialStore};

/// Create the platform-appropriate credential store.
pub fn make_credential_store() -> impl CredentialStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::new(data_dir())
    }
}

/// Resolve the client configuration for this platform.
pub fn load_client_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::default().with_base_url_override(option_env!("EVENTS_API_URL"))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        let config = read_config(&data_dir().join(ClientConfig::filename()));
        let from_env = std::env::var(store::config::BASE_URL_ENV).ok();
        config.with_base_url_override(from_env.as_deref())
    }
}

/// Suspend the current task.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("events-client")
}

/// A missing file means defaults; a malformed one is logged and ignored.
#[cfg(not(target_arch = "wasm32"))]
fn read_config(path: &std::path::Path) -> ClientConfig {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return ClientConfig::default();
    };
    ClientConfig::from_toml(&raw).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
        ClientConfig::default()
    })
}
