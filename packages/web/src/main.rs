use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Admin, Home, Login, Projects, ProjectsArchive};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/projects")]
    Projects {},
    #[route("/projects-archive")]
    ProjectsArchive {},
    #[route("/login")]
    Login {},
    #[route("/admin")]
    Admin {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Unknown paths go back to the home page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
