//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::SessionStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via `store::LocalStore`
//! - **Native**: a session file under `<data_dir>/portfolio/` via [`store::FileStore`]
//!
//! Native builds also read `<data_dir>/portfolio/config.toml` when it exists.

use dioxus::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStore = store::FileStore;

/// The client type every page uses.
pub type AppClient = api::ApiClient<api::HttpTransport, AppStore>;

/// The session manager type provided by [`crate::AuthProvider`].
pub type AppSession = api::SessionManager<api::HttpTransport, AppStore>;

/// Create the platform-appropriate client with the build-time configuration.
pub fn make_client() -> AppClient {
    api::ApiClient::new(load_config(), api::HttpTransport::new(), make_store())
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("portfolio")
}

fn make_store() -> AppStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::FileStore::new(data_dir())
    }
}

fn load_config() -> api::ClientConfig {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        api::ClientConfig::default()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let path = data_dir().join("config.toml");
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return api::ClientConfig::default();
        };
        match api::ClientConfig::from_toml(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                api::ClientConfig::default()
            }
        }
    }
}

/// The client provided by [`crate::AuthProvider`].
pub fn use_client() -> AppClient {
    use_context::<AppClient>()
}
