use api::Project;
use dioxus::prelude::*;

use super::TechTags;
use crate::icons::{FaArrowUpRightFromSquare, FaGithub};
use crate::Icon;

#[component]
pub fn ProjectCard(project: Project) -> Element {
    let fields = &project.fields;

    rsx! {
        div { class: "project-card",
            if !fields.image_url.is_empty() {
                img { class: "project-image", src: "{fields.image_url}", alt: "{fields.title}" }
            }
            div { class: "project-content",
                h3 { "{fields.title}" }
                p { class: "project-description", "{fields.short_description}" }
                TechTags { technologies: fields.technologies.clone() }
                div { class: "project-links",
                    if !fields.github_url.is_empty() {
                        a {
                            class: "project-link",
                            href: "{fields.github_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { width: 14, height: 14, icon: FaGithub }
                            " Code"
                        }
                    }
                    if !fields.demo_url.is_empty() {
                        a {
                            class: "project-link",
                            href: "{fields.demo_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { width: 14, height: 14, icon: FaArrowUpRightFromSquare }
                            " Demo"
                        }
                    } else if !fields.project_url.is_empty() {
                        a {
                            class: "project-link",
                            href: "{fields.project_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { width: 14, height: 14, icon: FaArrowUpRightFromSquare }
                            " Visit"
                        }
                    }
                }
            }
        }
    }
}
