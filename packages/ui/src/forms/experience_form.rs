use api::{ExperienceFields, ExperienceStatus};
use dioxus::prelude::*;

use super::{parse_order, update_draft, DraftInput, FormActions, TextAreaField, TextField};
use crate::pages::FormMode;

#[derive(Clone, Debug, PartialEq)]
pub enum ExperienceInput {
    Title(String),
    Company(String),
    StartDate(String),
    EndDate(String),
    Description(String),
    Technologies(String),
    CompanyUrl(String),
    DisplayOrder(String),
    Status(String),
}

impl DraftInput for ExperienceInput {
    type Draft = ExperienceFields;

    fn apply(self, draft: &ExperienceFields) -> ExperienceFields {
        let mut next = draft.clone();
        match self {
            Self::Title(v) => next.title = v,
            Self::Company(v) => next.company = v,
            Self::StartDate(v) => next.start_date = v,
            Self::EndDate(v) => next.end_date = v,
            Self::Description(v) => next.description = v,
            Self::Technologies(v) => next.technologies = v,
            Self::CompanyUrl(v) => next.company_url = v,
            Self::DisplayOrder(v) => next.display_order = parse_order(&v, draft.display_order),
            Self::Status(v) => {
                if let Ok(status) = v.parse::<ExperienceStatus>() {
                    next.status = status;
                }
            }
        }
        next
    }
}

/// Create or edit an experience entry. Dates are free text.
#[component]
pub fn ExperienceForm(
    mode: FormMode,
    seed: ExperienceFields,
    #[props(default)] saving: bool,
    on_submit: EventHandler<ExperienceFields>,
    on_cancel: EventHandler<()>,
) -> Element {
    let draft = use_signal(|| seed);
    let fields = draft();

    let (heading, submit_label) = match mode {
        FormMode::Create => ("Add New Experience", "Create Experience"),
        FormMode::Edit(_) => ("Edit Experience", "Update Experience"),
    };

    rsx! {
        form {
            class: "admin-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(draft());
            },
            h3 { "{heading}" }

            div { class: "form-row",
                TextField {
                    id: "experience-title",
                    label: "Job Title *",
                    value: fields.title.clone(),
                    required: true,
                    oninput: move |v| update_draft(draft, ExperienceInput::Title(v)),
                }
                TextField {
                    id: "experience-company",
                    label: "Company *",
                    value: fields.company.clone(),
                    required: true,
                    oninput: move |v| update_draft(draft, ExperienceInput::Company(v)),
                }
            }
            div { class: "form-row",
                TextField {
                    id: "experience-start-date",
                    label: "Start Date *",
                    value: fields.start_date.clone(),
                    placeholder: "Jan 2022",
                    required: true,
                    oninput: move |v| update_draft(draft, ExperienceInput::StartDate(v)),
                }
                TextField {
                    id: "experience-end-date",
                    label: "End Date *",
                    value: fields.end_date.clone(),
                    placeholder: "Present",
                    required: true,
                    oninput: move |v| update_draft(draft, ExperienceInput::EndDate(v)),
                }
            }
            TextAreaField {
                id: "experience-description",
                label: "Description *",
                value: fields.description.clone(),
                rows: 5,
                required: true,
                oninput: move |v| update_draft(draft, ExperienceInput::Description(v)),
            }
            TextField {
                id: "experience-technologies",
                label: "Technologies (comma-separated)",
                value: fields.technologies.clone(),
                oninput: move |v| update_draft(draft, ExperienceInput::Technologies(v)),
            }
            TextField {
                id: "experience-company-url",
                label: "Company URL",
                kind: "url",
                value: fields.company_url.clone(),
                oninput: move |v| update_draft(draft, ExperienceInput::CompanyUrl(v)),
            }
            div { class: "form-row",
                TextField {
                    id: "experience-display-order",
                    label: "Display Order",
                    kind: "number",
                    value: fields.display_order.to_string(),
                    oninput: move |v| update_draft(draft, ExperienceInput::DisplayOrder(v)),
                }
                div { class: "form-field",
                    label { r#for: "experience-status", "Status" }
                    select {
                        id: "experience-status",
                        value: fields.status.as_str(),
                        onchange: move |evt: FormEvent| update_draft(draft, ExperienceInput::Status(evt.value())),
                        for status in ExperienceStatus::ALL {
                            option { value: status.as_str(), "{status.label()}" }
                        }
                    }
                }
            }

            FormActions { submit_label: submit_label.to_string(), saving, on_cancel }
        }
    }
}
