//! Page state: what each page fetches, what it falls back to, and the admin
//! panel's transitions. Nothing here renders; the views in
//! [`crate::views`] hold these values in signals.

pub mod admin;
pub mod archive;
pub mod fallback;
pub mod home;
pub mod load_state;
pub mod login;

pub use admin::{AdminData, AdminState, DeleteTarget, Editor, FormMode, Tab};
pub use archive::{ArchiveData, VISIBLE_TAGS};
pub use home::HomeData;
pub use load_state::{Fallback, LoadState};

#[cfg(test)]
pub(crate) fn test_client(
    backend: api::MemoryBackend,
    signed_in: bool,
) -> api::ApiClient<api::MemoryBackend, store::MemoryStore> {
    let store = if signed_in {
        let token = backend.issue_token("admin");
        store::MemoryStore::with_session(api::Session::new(token, "admin"))
    } else {
        store::MemoryStore::new()
    };
    api::ApiClient::new(api::ClientConfig::default(), backend, store)
}
