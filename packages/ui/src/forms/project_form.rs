use api::{ProjectFields, ProjectStatus};
use dioxus::prelude::*;

use super::{parse_order, update_draft, DraftInput, FormActions, TextAreaField, TextField};
use crate::pages::FormMode;

/// A single edit to a project draft.
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectInput {
    Title(String),
    ShortDescription(String),
    Description(String),
    Technologies(String),
    ImageUrl(String),
    ProjectUrl(String),
    GithubUrl(String),
    DemoUrl(String),
    DisplayOrder(String),
    Featured(bool),
    Status(String),
}

impl DraftInput for ProjectInput {
    type Draft = ProjectFields;

    fn apply(self, draft: &ProjectFields) -> ProjectFields {
        let mut next = draft.clone();
        match self {
            Self::Title(v) => next.title = v,
            Self::ShortDescription(v) => next.short_description = v,
            Self::Description(v) => next.description = v,
            Self::Technologies(v) => next.technologies = v,
            Self::ImageUrl(v) => next.image_url = v,
            Self::ProjectUrl(v) => next.project_url = v,
            Self::GithubUrl(v) => next.github_url = v,
            Self::DemoUrl(v) => next.demo_url = v,
            Self::DisplayOrder(v) => next.display_order = parse_order(&v, draft.display_order),
            Self::Featured(v) => next.is_featured = v,
            Self::Status(v) => {
                if let Ok(status) = v.parse::<ProjectStatus>() {
                    next.status = status;
                }
            }
        }
        next
    }
}

/// Create or edit a project.
///
/// The draft is seeded once from `seed`; key the form by `mode` so that
/// editing another project starts a fresh draft.
#[component]
pub fn ProjectForm(
    mode: FormMode,
    seed: ProjectFields,
    #[props(default)] saving: bool,
    on_submit: EventHandler<ProjectFields>,
    on_cancel: EventHandler<()>,
) -> Element {
    let draft = use_signal(|| seed);
    let fields = draft();

    let heading = match mode {
        FormMode::Create => "Add New Project",
        FormMode::Edit(_) => "Edit Project",
    };
    let submit_label = match mode {
        FormMode::Create => "Create Project",
        FormMode::Edit(_) => "Update Project",
    };

    rsx! {
        form {
            class: "admin-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(draft());
            },
            h3 { "{heading}" }

            TextField {
                id: "project-title",
                label: "Title *",
                value: fields.title.clone(),
                required: true,
                oninput: move |v| update_draft(draft, ProjectInput::Title(v)),
            }
            TextField {
                id: "project-short-description",
                label: "Short Description *",
                value: fields.short_description.clone(),
                required: true,
                oninput: move |v| update_draft(draft, ProjectInput::ShortDescription(v)),
            }
            TextAreaField {
                id: "project-description",
                label: "Full Description",
                value: fields.description.clone(),
                rows: 6,
                oninput: move |v| update_draft(draft, ProjectInput::Description(v)),
            }
            TextField {
                id: "project-technologies",
                label: "Technologies (comma-separated)",
                value: fields.technologies.clone(),
                placeholder: "React, Java, Spring Boot",
                oninput: move |v| update_draft(draft, ProjectInput::Technologies(v)),
            }

            div { class: "form-row",
                TextField {
                    id: "project-image-url",
                    label: "Image URL",
                    kind: "url",
                    value: fields.image_url.clone(),
                    oninput: move |v| update_draft(draft, ProjectInput::ImageUrl(v)),
                }
                TextField {
                    id: "project-url",
                    label: "Project URL",
                    kind: "url",
                    value: fields.project_url.clone(),
                    oninput: move |v| update_draft(draft, ProjectInput::ProjectUrl(v)),
                }
            }
            div { class: "form-row",
                TextField {
                    id: "project-github-url",
                    label: "GitHub URL",
                    kind: "url",
                    value: fields.github_url.clone(),
                    oninput: move |v| update_draft(draft, ProjectInput::GithubUrl(v)),
                }
                TextField {
                    id: "project-demo-url",
                    label: "Demo URL",
                    kind: "url",
                    value: fields.demo_url.clone(),
                    oninput: move |v| update_draft(draft, ProjectInput::DemoUrl(v)),
                }
            }

            div { class: "form-row",
                TextField {
                    id: "project-display-order",
                    label: "Display Order",
                    kind: "number",
                    value: fields.display_order.to_string(),
                    oninput: move |v| update_draft(draft, ProjectInput::DisplayOrder(v)),
                }
                div { class: "form-field",
                    label { r#for: "project-status", "Status" }
                    select {
                        id: "project-status",
                        value: fields.status.as_str(),
                        onchange: move |evt: FormEvent| update_draft(draft, ProjectInput::Status(evt.value())),
                        for status in ProjectStatus::ALL {
                            option { value: status.as_str(), "{status.label()}" }
                        }
                    }
                }
            }

            div { class: "form-field form-checkbox",
                label {
                    input {
                        r#type: "checkbox",
                        checked: fields.is_featured,
                        onchange: move |evt: FormEvent| update_draft(draft, ProjectInput::Featured(evt.checked())),
                    }
                    " Featured Project"
                }
            }

            FormActions { submit_label: submit_label.to_string(), saving, on_cancel }
        }
    }
}
