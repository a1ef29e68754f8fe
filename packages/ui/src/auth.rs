//! Session context and hooks for the UI.

use api::SessionState;
use dioxus::prelude::*;

use crate::client::{make_client, AppSession};

/// Get the application's session manager.
/// The signal updates when the user logs in or out.
pub fn use_auth() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Current session state, subscribing the caller to changes.
pub fn use_session_state() -> SessionState {
    use_auth().read().state().clone()
}

/// Provider component that owns the API client and the session manager.
/// Wrap your app with this component; it is the only place either is built.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(make_client);
    let mut session = use_signal(move || AppSession::new(client));

    // Resolve the persisted session on mount
    let _ = use_resource(move || async move {
        let mut manager = session.peek().clone();
        manager.restore().await;
        session.set(manager);
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Logout is local only: the stored token is dropped and the page goes back
/// to `/`.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        auth.write().logout();
        crate::redirect("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
