use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::components::{About, Contact, ExperienceList, Header, Hero, Loading, ProjectCard};
use crate::pages::home::load_home;
use crate::use_client;

/// Public landing page: hero, about, experience, featured projects, contact.
#[component]
pub fn HomeView() -> Element {
    let client = use_client();
    let home = use_resource(move || {
        let client = client.clone();
        async move { load_home(&client).await }
    });

    let state = home.read().clone().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Header {}
        match state.data() {
            None => rsx! { Loading {} },
            Some(data) => rsx! {
                main { class: "home",
                    Hero { info: data.info.clone() }
                    About { about: data.info.about.clone() }
                    ExperienceList { experiences: data.experiences.clone() }
                    section { id: "projects", class: "section featured-projects",
                        div { class: "container",
                            h2 { class: "section-title", "Featured Projects" }
                            div { class: "projects-grid",
                                for project in data.featured.iter().cloned() {
                                    ProjectCard { key: "{project.id}", project }
                                }
                            }
                            a { class: "view-all", href: "/projects-archive", "View full project archive" }
                        }
                    }
                    Contact { info: data.info.clone() }
                }
            },
        }
    }
}
