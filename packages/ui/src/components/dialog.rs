use dioxus::prelude::*;

use super::{Button, ButtonVariant, PendingButton};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let width = if wide { "modal modal-wide" } else { "modal" };
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "{width}",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn Dialog(
    title: String,
    #[props(default)] description: Option<String>,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close,
            wide,
            div {
                class: "modal-header",
                h2 { class: "modal-title", "{title}" }
                if let Some(description) = description {
                    p { class: "muted", "{description}" }
                }
            }
            div { class: "modal-body", {children} }
        }
    }
}

/// Yes/no confirmation for destructive actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = "Deleting...".to_string())] pending_label: String,
    pending: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Dialog {
            title,
            on_close: move |_| {
                if !pending {
                    on_cancel.call(());
                }
            },
            p { "{message}" }
            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: pending,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                PendingButton {
                    variant: ButtonVariant::Destructive,
                    pending,
                    pending_label,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
