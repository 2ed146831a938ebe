//! Form controls. Every control is controlled: the caller owns the value.

use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            "aria-invalid": invalid,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] invalid: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input textarea",
            placeholder: "{placeholder}",
            rows: "{rows}",
            value: "{value}",
            "aria-invalid": invalid,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// A native select over `(value, label)` pairs.
#[component]
pub fn Select(
    #[props(default)] id: String,
    #[props(default)] class: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] placeholder: Option<String>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "input select {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt.value()),
            if let Some(placeholder) = placeholder {
                option { value: "", disabled: true, "{placeholder}" }
            }
            for (opt_value, opt_label) in options {
                option {
                    key: "{opt_value}",
                    value: "{opt_value}",
                    selected: opt_value == value,
                    "{opt_label}"
                }
            }
        }
    }
}

/// Label, control, and the field's validation message.
#[component]
pub fn Field(
    label: String,
    #[props(default)] html_for: String,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: html_for.clone(), "{label}" }
            {children}
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

/// Search box with a leading magnifier icon.
#[component]
pub fn SearchInput(
    value: String,
    placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "search",
            crate::Icon { icon: crate::icons::FaMagnifyingGlass, width: 14, height: 14, class: "search-icon" }
            input {
                class: "input search-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
