use api::Experience;
use dioxus::prelude::*;

use super::TechTags;

/// Experience timeline, in server order.
#[component]
pub fn ExperienceList(experiences: Vec<Experience>) -> Element {
    if experiences.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "experience", class: "section experience",
            div { class: "container",
                h2 { class: "section-title", "Experience" }
                ol { class: "experience-list",
                    for experience in experiences {
                        li { key: "{experience.id}", class: "experience-item",
                            div { class: "experience-period", "{experience.fields.period()}" }
                            div {
                                h3 {
                                    "{experience.fields.title} · "
                                    if experience.fields.company_url.is_empty() {
                                        "{experience.fields.company}"
                                    } else {
                                        a {
                                            href: "{experience.fields.company_url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "{experience.fields.company}"
                                        }
                                    }
                                }
                                p { "{experience.fields.description}" }
                                TechTags { technologies: experience.fields.technologies.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
