use dioxus::prelude::*;

#[component]
pub fn About(about: String) -> Element {
    if about.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "about", class: "section about",
            div { class: "container",
                h2 { class: "section-title", "About" }
                for paragraph in about.split("\n\n").filter(|p| !p.trim().is_empty()) {
                    p { "{paragraph}" }
                }
            }
        }
    }
}
