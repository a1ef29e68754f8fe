use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::components::{Header, Loading, ProjectCard};
use crate::pages::archive::load_projects;
use crate::use_client;

#[component]
pub fn ProjectsView() -> Element {
    let client = use_client();
    let projects = use_resource(move || {
        let client = client.clone();
        async move { load_projects(&client).await }
    });

    let state = projects.read().clone().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Header {}
        match state.data() {
            None => rsx! { Loading {} },
            Some(projects) => rsx! {
                main { class: "section projects-page",
                    div { class: "container",
                        h1 { class: "section-title", "All Projects" }
                        if projects.is_empty() {
                            p { class: "empty-state", "No projects yet." }
                        }
                        div { class: "projects-grid",
                            for project in projects.iter().cloned() {
                                ProjectCard { key: "{project.id}", project }
                            }
                        }
                    }
                }
            },
        }
    }
}
