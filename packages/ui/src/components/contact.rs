use api::PersonalInfo;
use dioxus::prelude::*;

use crate::icons::{FaEnvelope, FaPhone};
use crate::Icon;

/// Contact section; hidden when there is neither email nor phone.
#[component]
pub fn Contact(info: PersonalInfo) -> Element {
    if info.email.is_empty() && info.phone.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "container",
                h2 { class: "section-title", "Get In Touch" }
                if !info.email.is_empty() {
                    a { class: "contact-link", href: "mailto:{info.email}",
                        Icon { width: 16, height: 16, icon: FaEnvelope }
                        " {info.email}"
                    }
                }
                if !info.phone.is_empty() {
                    a { class: "contact-link", href: "tel:{info.phone}",
                        Icon { width: 16, height: 16, icon: FaPhone }
                        " {info.phone}"
                    }
                }
            }
        }
    }
}
