mod admin;
pub use admin::Admin;

mod login;
pub use login::Login;

use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! { ui::HomeView {} }
}

#[component]
pub fn Projects() -> Element {
    rsx! { ui::ProjectsView {} }
}

#[component]
pub fn ProjectsArchive() -> Element {
    rsx! { ui::ArchiveView {} }
}
