use dioxus::prelude::*;

/// Yes/no confirmation shown over the page.
///
/// Clicking the backdrop or pressing Escape counts as "Cancel"; only the
/// confirm button calls `on_confirm`.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal-card confirm-dialog",
                role: "alertdialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                onkeydown: move |evt: Event<KeyboardData>| {
                    if evt.key() == Key::Escape {
                        on_cancel.call(());
                    }
                },
                p { "{message}" }
                div { class: "form-actions",
                    button {
                        class: "btn btn-danger",
                        autofocus: true,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
