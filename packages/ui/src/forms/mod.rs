//! Controlled-input admin forms.
//!
//! Each form owns a draft signal seeded from its props. Every input event is
//! turned into a typed edit (`ProjectInput`, `ExperienceInput`,
//! `PersonalInfoInput`) that replaces exactly one field, and submit hands the
//! whole draft to `on_submit` untouched. The only validation is the HTML
//! `required` attribute.

use dioxus::prelude::*;

mod experience_form;
mod personal_info_form;
mod project_form;

pub use experience_form::{ExperienceForm, ExperienceInput};
pub use personal_info_form::{PersonalInfoForm, PersonalInfoInput};
pub use project_form::{ProjectForm, ProjectInput};

/// One field edit against a draft.
pub trait DraftInput {
    type Draft;

    /// The draft with this edit applied; `draft` itself is left alone.
    fn apply(self, draft: &Self::Draft) -> Self::Draft;
}

/// Apply `input` to the draft held in `draft`.
pub fn update_draft<I>(mut draft: Signal<I::Draft>, input: I)
where
    I: DraftInput,
    I::Draft: 'static,
{
    let next = input.apply(&draft.peek());
    draft.set(next);
}

/// `""` is zero; anything else that is not a number keeps `current`.
pub(crate) fn parse_order(raw: &str, current: i32) -> i32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    raw.parse().unwrap_or(current)
}

#[component]
pub(crate) fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] required: bool,
    #[props(default)] placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                r#type: "{kind}",
                value: "{value}",
                placeholder: "{placeholder}",
                required,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub(crate) fn TextAreaField(
    id: String,
    label: String,
    value: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] required: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { r#for: "{id}", "{label}" }
            textarea {
                id: "{id}",
                rows: "{rows}",
                value: "{value}",
                required,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

/// Submit and cancel buttons shared by the entity forms.
#[component]
pub(crate) fn FormActions(
    submit_label: String,
    #[props(default)] saving: bool,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "form-actions",
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: saving,
                if saving { "Saving..." } else { "{submit_label}" }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order("3", 1), 3);
        assert_eq!(parse_order(" -2 ", 1), -2);
        assert_eq!(parse_order("", 7), 0);
        assert_eq!(parse_order("abc", 7), 7);
    }
}
