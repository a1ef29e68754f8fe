//! Page views. Each one fetches through the shared client on mount and
//! renders a [`LoadState`](crate::pages::LoadState).

use dioxus::prelude::*;

mod admin;
pub use admin::AdminView;

mod archive;
pub use archive::ArchiveView;

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod projects;
pub use projects::ProjectsView;

pub(crate) const VIEWS_CSS: Asset = asset!("/src/views/views.css");
