use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Inline, dismissible error message.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert",
            span { "{message}" }
            button {
                class: "error-banner-close",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                Icon { width: 14, height: 14, icon: FaXmark }
            }
        }
    }
}
