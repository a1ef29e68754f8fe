use api::PersonalInfo;
use dioxus::prelude::*;

use crate::icons::{FaFileLines, FaGithub, FaLinkedin};
use crate::Icon;

#[component]
pub fn Hero(info: PersonalInfo) -> Element {
    let links = info.links();

    rsx! {
        section { class: "hero",
            if !info.profile_image_url.is_empty() {
                img {
                    class: "hero-image",
                    src: "{info.profile_image_url}",
                    alt: "{info.name}",
                }
            }
            div { class: "hero-content",
                h1 { "{info.name}" }
                h2 { "{info.title}" }
                p { "{info.bio}" }
                div { class: "hero-links",
                    for (i, (label, url)) in links.into_iter().enumerate() {
                        a {
                            key: "{label}",
                            class: if i == 0 { "btn btn-primary" } else { "btn btn-secondary" },
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {link_icon(label)}
                            " {label}"
                        }
                    }
                }
            }
        }
    }
}

fn link_icon(label: &str) -> Element {
    match label {
        "LinkedIn" => rsx! { Icon { width: 16, height: 16, icon: FaLinkedin } },
        "GitHub" => rsx! { Icon { width: 16, height: 16, icon: FaGithub } },
        _ => rsx! { Icon { width: 16, height: 16, icon: FaFileLines } },
    }
}
