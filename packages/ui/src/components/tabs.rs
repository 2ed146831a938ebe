use dioxus::prelude::*;

/// Tab strip over `(value, label)` pairs. The panel content is rendered by the
/// caller from `active`.
#[component]
pub fn Tabs(tabs: Vec<(String, String)>, active: Signal<String>) -> Element {
    let mut active = active;
    let buttons = tabs.into_iter().map(move |(value, label)| {
        let class = if *active.read() == value { "tab tab-active" } else { "tab" };
        let key = value.clone();
        rsx! {
            button {
                key: "{key}",
                class,
                role: "tab",
                onclick: move |_| active.set(value.clone()),
                "{label}"
            }
        }
    });

    rsx! {
        div { class: "tabs", role: "tablist", {buttons} }
    }
}
