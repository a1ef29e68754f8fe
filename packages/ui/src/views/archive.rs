use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::components::{Loading, TechTags};
use crate::icons::{FaArrowLeft, FaArrowUpRightFromSquare, FaGithub, FaStar};
use crate::pages::archive::load_archive;
use crate::pages::VISIBLE_TAGS;
use crate::{use_client, Icon};

/// Every project in a compact table, with counts.
#[component]
pub fn ArchiveView() -> Element {
    let client = use_client();
    let archive = use_resource(move || {
        let client = client.clone();
        async move { load_archive(&client).await }
    });

    let state = archive.read().clone().unwrap_or_default();
    let Some(data) = state.data() else {
        return rsx! { Loading {} };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header { class: "archive-header",
            div { class: "container archive-header-inner",
                h1 { "Project Archive" }
                a { class: "btn btn-secondary", href: "/",
                    Icon { width: 14, height: 14, icon: FaArrowLeft }
                    " Back to Home"
                }
            }
        }
        main { class: "container archive",
            p { class: "archive-intro",
                "A collection of everything I have worked on, from personal experiments to professional work."
            }
            div { class: "archive-counts",
                span { "{data.total()} Projects" }
                span { "{data.featured_count()} Featured" }
            }

            if data.projects.is_empty() {
                p { class: "empty-state", "No projects found." }
            } else {
                table { class: "archive-table",
                    thead {
                        tr {
                            th { "Project" }
                            th { "Built with" }
                            th { "Links" }
                        }
                    }
                    tbody {
                        for project in data.projects.iter() {
                            tr { key: "{project.id}",
                                td {
                                    div { class: "archive-title",
                                        "{project.fields.title}"
                                        if project.fields.is_featured {
                                            span { class: "featured-marker", title: "Featured",
                                                Icon { width: 12, height: 12, icon: FaStar }
                                            }
                                        }
                                    }
                                    p { class: "archive-summary", "{project.fields.summary()}" }
                                }
                                td {
                                    TechTags {
                                        technologies: project.fields.technologies.clone(),
                                        limit: VISIBLE_TAGS,
                                    }
                                }
                                td { class: "archive-links",
                                    if !project.fields.github_url.is_empty() {
                                        a {
                                            href: "{project.fields.github_url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            title: "GitHub",
                                            Icon { width: 16, height: 16, icon: FaGithub }
                                        }
                                    }
                                    if let Some(link) = project.fields.primary_link() {
                                        a {
                                            href: "{link}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            title: "Visit",
                                            Icon { width: 16, height: 16, icon: FaArrowUpRightFromSquare }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            p { class: "archive-footer", "{data.footer()}" }
        }
    }
}
