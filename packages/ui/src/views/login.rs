use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::pages::login::{submit_login, AFTER_LOGIN};
use crate::{redirect, use_auth};

/// Username/password sign-in for the admin panel.
#[component]
pub fn LoginView() -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<&'static str>::None);
    let mut submitting = use_signal(|| false);

    // If already logged in, go straight to the panel
    if auth.read().state().is_authenticated() {
        redirect(AFTER_LOGIN);
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        submitting.set(true);
        let (user, pass) = (username(), password());
        spawn(async move {
            let mut manager = auth.peek().clone();
            let result = submit_login(&mut manager, &user, &pass).await;
            auth.set(manager);
            submitting.set(false);
            match result {
                Ok(()) => redirect(AFTER_LOGIN),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div { class: "login-container",
            form { class: "login-card", onsubmit: handle_submit,
                h1 { "Admin Login" }

                if let Some(message) = error() {
                    div { class: "error-banner", role: "alert", "{message}" }
                }

                div { class: "form-field",
                    label { r#for: "login-username", "Username" }
                    input {
                        id: "login-username",
                        r#type: "text",
                        autocomplete: "username",
                        required: true,
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        autocomplete: "current-password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary login-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Logging in..." } else { "Login" }
                }
                a { class: "back-link", href: "/", "Back to Home" }
            }
        }
    }
}
