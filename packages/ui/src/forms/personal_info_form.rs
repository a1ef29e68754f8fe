use api::PersonalInfo;
use dioxus::prelude::*;

use super::{update_draft, DraftInput, TextAreaField, TextField};

#[derive(Clone, Debug, PartialEq)]
pub enum PersonalInfoInput {
    Name(String),
    Title(String),
    Bio(String),
    About(String),
    Email(String),
    Phone(String),
    LinkedinUrl(String),
    GithubUrl(String),
    ProfileImageUrl(String),
    ResumeUrl(String),
}

impl DraftInput for PersonalInfoInput {
    type Draft = PersonalInfo;

    fn apply(self, draft: &PersonalInfo) -> PersonalInfo {
        let mut next = draft.clone();
        match self {
            Self::Name(v) => next.name = v,
            Self::Title(v) => next.title = v,
            Self::Bio(v) => next.bio = v,
            Self::About(v) => next.about = v,
            Self::Email(v) => next.email = v,
            Self::Phone(v) => next.phone = v,
            Self::LinkedinUrl(v) => next.linkedin_url = v,
            Self::GithubUrl(v) => next.github_url = v,
            Self::ProfileImageUrl(v) => next.profile_image_url = v,
            Self::ResumeUrl(v) => next.resume_url = v,
        }
        next
    }
}

/// Edit the singleton profile. Always visible on its tab; submitting upserts.
#[component]
pub fn PersonalInfoForm(seed: PersonalInfo, on_submit: EventHandler<PersonalInfo>) -> Element {
    let draft = use_signal(|| seed);
    let info = draft();

    rsx! {
        form {
            class: "admin-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(draft());
            },

            div { class: "form-row",
                TextField {
                    id: "info-name",
                    label: "Name *",
                    value: info.name.clone(),
                    required: true,
                    oninput: move |v| update_draft(draft, PersonalInfoInput::Name(v)),
                }
                TextField {
                    id: "info-title",
                    label: "Title *",
                    value: info.title.clone(),
                    required: true,
                    oninput: move |v| update_draft(draft, PersonalInfoInput::Title(v)),
                }
            }
            TextAreaField {
                id: "info-bio",
                label: "Bio",
                value: info.bio.clone(),
                rows: 3,
                oninput: move |v| update_draft(draft, PersonalInfoInput::Bio(v)),
            }
            TextAreaField {
                id: "info-about",
                label: "About",
                value: info.about.clone(),
                rows: 6,
                oninput: move |v| update_draft(draft, PersonalInfoInput::About(v)),
            }
            div { class: "form-row",
                TextField {
                    id: "info-email",
                    label: "Email",
                    kind: "email",
                    value: info.email.clone(),
                    oninput: move |v| update_draft(draft, PersonalInfoInput::Email(v)),
                }
                TextField {
                    id: "info-phone",
                    label: "Phone",
                    kind: "tel",
                    value: info.phone.clone(),
                    oninput: move |v| update_draft(draft, PersonalInfoInput::Phone(v)),
                }
            }
            div { class: "form-row",
                TextField {
                    id: "info-linkedin-url",
                    label: "LinkedIn URL",
                    kind: "url",
                    value: info.linkedin_url.clone(),
                    oninput: move |v| update_draft(draft, PersonalInfoInput::LinkedinUrl(v)),
                }
                TextField {
                    id: "info-github-url",
                    label: "GitHub URL",
                    kind: "url",
                    value: info.github_url.clone(),
                    oninput: move |v| update_draft(draft, PersonalInfoInput::GithubUrl(v)),
                }
            }
            div { class: "form-row",
                TextField {
                    id: "info-profile-image-url",
                    label: "Profile Image URL",
                    kind: "url",
                    value: info.profile_image_url.clone(),
                    oninput: move |v| update_draft(draft, PersonalInfoInput::ProfileImageUrl(v)),
                }
                TextField {
                    id: "info-resume-url",
                    label: "Resume URL",
                    kind: "url",
                    value: info.resume_url.clone(),
                    oninput: move |v| update_draft(draft, PersonalInfoInput::ResumeUrl(v)),
                }
            }

            div { class: "form-actions",
                button { class: "btn btn-primary", r#type: "submit", "Save Personal Info" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_touches_only_its_field() {
        let draft = PersonalInfo {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        let next = PersonalInfoInput::GithubUrl("https://github.com/ada".to_string()).apply(&draft);
        assert_eq!(
            next,
            PersonalInfo {
                github_url: "https://github.com/ada".to_string(),
                ..draft.clone()
            }
        );
    }
}
