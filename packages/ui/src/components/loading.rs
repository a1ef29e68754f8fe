use dioxus::prelude::*;

/// Spinner shown while a page's data is in flight.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading-spinner" }
            p { class: "loading-label", "Loading..." }
        }
    }
}
