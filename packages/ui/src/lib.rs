//! This crate contains all shared UI for the workspace: the session context,
//! presentational components, admin forms, page state and page views.

pub mod components;
pub mod forms;
pub mod pages;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, use_client, AppClient, AppSession, AppStore};

mod auth;
pub use auth::{use_auth, use_session_state, AuthProvider, LogoutButton};

pub use views::{AdminView, ArchiveView, HomeView, LoginView, ProjectsView};

/// Full-page navigation to `path`.
///
/// Used after login and logout so every page re-reads the session from
/// storage. A no-op off the browser.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::warn!("Failed to navigate to {}: {:?}", path, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Navigation to {} requested outside the browser", path);
    }
}
