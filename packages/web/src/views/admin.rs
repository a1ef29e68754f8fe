//! Guarded admin route.

use api::SessionState;
use dioxus::prelude::*;
use ui::components::Loading;
use ui::use_session_state;

use crate::Route;

/// Admin panel, only for a signed-in user.
///
/// While the stored session is still being read this shows the loading
/// indicator; without a session it redirects to the login page.
#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();

    match use_session_state() {
        SessionState::Unknown => rsx! { Loading {} },
        SessionState::Unauthenticated => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        SessionState::Authenticated { .. } => rsx! { ui::AdminView {} },
    }
}
