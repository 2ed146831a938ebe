use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Destructive => "btn btn-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] small: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let size = if small { " btn-sm" } else { "" };
    rsx! {
        button {
            class: "{variant.class()}{size} {class}",
            r#type: "{r#type}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// A button that shows a spinner label while `pending`.
#[component]
pub fn PendingButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] small: bool,
    pending: bool,
    #[props(default = "Working...".to_string())] pending_label: String,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        Button {
            variant,
            small,
            disabled: pending || disabled,
            onclick: move |evt| onclick.call(evt),
            if pending {
                span { class: "spinner" }
                "{pending_label}"
            } else {
                {children}
            }
        }
    }
}
