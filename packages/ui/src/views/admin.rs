use api::{Experience, ExperienceFields, Id, PersonalInfo, Project, ProjectFields};
use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::client::AppClient;
use crate::components::{ConfirmDialog, ErrorBanner, Header, Loading};
use crate::forms::{ExperienceForm, PersonalInfoForm, ProjectForm};
use crate::icons::{FaPenToSquare, FaPlus, FaStar, FaTrash};
use crate::pages::admin::{delete_target, load_admin, reload, submit_experience, submit_project};
use crate::pages::{AdminData, AdminState, DeleteTarget, Editor, LoadState, Tab};
use crate::{use_client, Icon};

/// Tabbed CRUD panel for personal info, projects and experiences.
///
/// Route guarding happens in the platform router; this view assumes a
/// signed-in user and reports 401s like any other failed mutation.
#[component]
pub fn AdminView() -> Element {
    let client = use_client();
    let client = use_signal(move || client);
    let mut admin = use_signal(AdminState::default);
    let mut data = use_signal(LoadState::<AdminData>::default);

    use_future(move || async move {
        let loaded = load_admin(&client()).await;
        data.set(loaded);
    });

    let on_project_submit = move |fields: ProjectFields| {
        let Some(mode) = admin.write().begin_submit() else {
            return;
        };
        spawn(async move {
            match submit_project(&client(), mode, &fields).await {
                Ok(_) => {
                    admin.write().submitted(mode);
                    refresh(client(), data, Tab::Projects).await;
                }
                Err(e) => {
                    tracing::error!("Error saving project: {}", e);
                    admin.write().submit_failed("Failed to save project");
                }
            }
        });
    };

    let on_experience_submit = move |fields: ExperienceFields| {
        let Some(mode) = admin.write().begin_submit() else {
            return;
        };
        spawn(async move {
            match submit_experience(&client(), mode, &fields).await {
                Ok(_) => {
                    admin.write().submitted(mode);
                    refresh(client(), data, Tab::Experiences).await;
                }
                Err(e) => {
                    tracing::error!("Error saving experience: {}", e);
                    admin.write().submit_failed("Failed to save experience");
                }
            }
        });
    };

    let on_info_submit = move |info: PersonalInfo| {
        spawn(async move {
            let client = client();
            match client.personal_info().upsert(&info).await {
                Ok(_) => {
                    admin.write().dismiss_error();
                    refresh(client, data, Tab::PersonalInfo).await;
                }
                Err(e) => {
                    tracing::error!("Error saving personal info: {}", e);
                    admin.write().fail("Failed to save personal info");
                }
            }
        });
    };

    let on_confirm_delete = move |_: ()| {
        let Some(target) = admin.write().confirm_delete() else {
            return;
        };
        spawn(async move {
            match delete_target(&client(), target).await {
                Ok(()) => refresh(client(), data, target.tab()).await,
                Err(e) => {
                    tracing::error!("Error deleting {:?}: {}", target, e);
                    admin.write().fail(target.failure_message());
                }
            }
        });
    };

    let state = data.read().clone();
    let Some(current) = state.data() else {
        return rsx! {
            Header {}
            Loading {}
        };
    };
    let ui = admin.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Header {}
        main { class: "container admin-panel",
            h1 { "Admin Panel" }

            if let Some(message) = ui.error.clone() {
                ErrorBanner { message, on_dismiss: move |_| admin.write().dismiss_error() }
            }

            div { class: "admin-toolbar",
                div { class: "tab-buttons",
                    for tab in Tab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: if ui.tab == tab { "tab-btn active" } else { "tab-btn" },
                            onclick: move |_| admin.write().select_tab(tab),
                            "{tab.label()}"
                        }
                    }
                }
                if ui.tab != Tab::PersonalInfo && !ui.form_visible() {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| admin.write().add(),
                        Icon { width: 14, height: 14, icon: FaPlus }
                        if ui.tab == Tab::Projects { " Add New Project" } else { " Add New Experience" }
                    }
                }
            }

            match ui.editor.clone() {
                Editor::Hidden => rsx! {},
                Editor::Project { mode, seed } => rsx! {
                    ProjectForm {
                        key: "{mode.key()}",
                        mode,
                        seed,
                        saving: ui.saving,
                        on_submit: on_project_submit,
                        on_cancel: move |_| admin.write().cancel(),
                    }
                },
                Editor::Experience { mode, seed } => rsx! {
                    ExperienceForm {
                        key: "{mode.key()}",
                        mode,
                        seed,
                        saving: ui.saving,
                        on_submit: on_experience_submit,
                        on_cancel: move |_| admin.write().cancel(),
                    }
                },
            }

            match ui.tab {
                Tab::PersonalInfo => rsx! {
                    PersonalInfoForm { seed: current.info.clone(), on_submit: on_info_submit }
                },
                Tab::Projects => rsx! {
                    ProjectsTable {
                        projects: current.projects.clone(),
                        on_edit: move |project: Project| admin.write().edit_project(&project),
                        on_delete: move |id| admin.write().request_delete(DeleteTarget::Project(id)),
                    }
                },
                Tab::Experiences => rsx! {
                    ExperiencesTable {
                        experiences: current.experiences.clone(),
                        on_edit: move |experience: Experience| admin.write().edit_experience(&experience),
                        on_delete: move |id| admin.write().request_delete(DeleteTarget::Experience(id)),
                    }
                },
            }

            if let Some(target) = ui.pending_delete {
                ConfirmDialog {
                    message: target.prompt().to_string(),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| admin.write().cancel_delete(),
                }
            }
        }
    }
}

/// Re-fetch one list after a successful mutation.
async fn refresh(client: AppClient, mut data: Signal<LoadState<AdminData>>, tab: Tab) {
    let mut snapshot = data.peek().data().cloned().unwrap_or_default();
    reload(&client, tab, &mut snapshot).await;
    if let Some(current) = data.write().data_mut() {
        *current = snapshot;
    }
}

#[component]
fn ProjectsTable(
    projects: Vec<Project>,
    on_edit: EventHandler<Project>,
    on_delete: EventHandler<Id>,
) -> Element {
    rsx! {
        div { class: "admin-table",
            h2 { "Projects" }
            table {
                thead {
                    tr {
                        th { "Title" }
                        th { "Technologies" }
                        th { "Status" }
                        th { "Featured" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for project in projects {
                        tr { key: "{project.id}",
                            td { "{project.fields.title}" }
                            td { "{project.fields.technologies}" }
                            td {
                                span { class: "status-badge {project.fields.status.as_str()}",
                                    "{project.fields.status.label()}"
                                }
                            }
                            td {
                                if project.fields.is_featured {
                                    Icon { width: 14, height: 14, icon: FaStar }
                                } else {
                                    "-"
                                }
                            }
                            RowActions {
                                on_edit: {
                                    let project = project.clone();
                                    move |_| on_edit.call(project.clone())
                                },
                                on_delete: move |_| on_delete.call(project.id),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ExperiencesTable(
    experiences: Vec<Experience>,
    on_edit: EventHandler<Experience>,
    on_delete: EventHandler<Id>,
) -> Element {
    rsx! {
        div { class: "admin-table",
            h2 { "Experiences" }
            table {
                thead {
                    tr {
                        th { "Title" }
                        th { "Company" }
                        th { "Period" }
                        th { "Technologies" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for experience in experiences {
                        tr { key: "{experience.id}",
                            td { "{experience.fields.title}" }
                            td { "{experience.fields.company}" }
                            td { "{experience.fields.period()}" }
                            td { "{experience.fields.technologies}" }
                            td {
                                span { class: "status-badge {experience.fields.status.as_str()}",
                                    "{experience.fields.status.label()}"
                                }
                            }
                            RowActions {
                                on_edit: {
                                    let experience = experience.clone();
                                    move |_| on_edit.call(experience.clone())
                                },
                                on_delete: move |_| on_delete.call(experience.id),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RowActions(on_edit: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        td { class: "actions",
            button {
                class: "btn-icon btn-edit",
                title: "Edit",
                onclick: move |_| on_edit.call(()),
                Icon { width: 14, height: 14, icon: FaPenToSquare }
            }
            button {
                class: "btn-icon btn-delete",
                title: "Delete",
                onclick: move |_| on_delete.call(()),
                Icon { width: 14, height: 14, icon: FaTrash }
            }
        }
    }
}
