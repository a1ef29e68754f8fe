use api::SessionState;
use dioxus::prelude::*;

use crate::{use_session_state, LogoutButton};

/// Site navigation. Shows Admin and Logout to a signed-in user, Login
/// otherwise, and nothing session-related until the session is resolved.
#[component]
pub fn Header() -> Element {
    let state = use_session_state();

    rsx! {
        header { class: "site-header",
            div { class: "container site-header-inner",
                a { class: "logo", href: "/", "Portfolio" }
                nav { class: "nav",
                    a { href: "/", "Home" }
                    a { href: "/projects", "Projects" }
                    a { href: "/projects-archive", "Archive" }
                    match state {
                        SessionState::Unknown => rsx! {},
                        SessionState::Authenticated { username } => rsx! {
                            a { href: "/admin", "Admin" }
                            span { class: "nav-user", "{username}" }
                            LogoutButton { class: "btn-logout" }
                        },
                        SessionState::Unauthenticated => rsx! {
                            a { href: "/login", "Login" }
                        },
                    }
                }
            }
        }
    }
}
