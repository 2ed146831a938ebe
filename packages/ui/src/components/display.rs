use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "badge",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Danger => "badge badge-danger",
            BadgeVariant::Info => "badge badge-info",
        }
    }
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span { class: "{variant.class()}", {children} }
    }
}

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}

/// Grey placeholder block shown while data loads.
#[component]
pub fn Skeleton(#[props(default = "1rem".to_string())] height: String) -> Element {
    rsx! {
        div { class: "skeleton", style: "height: {height}" }
    }
}

/// `count` skeleton cards in a grid.
#[component]
pub fn SkeletonGrid(#[props(default = 6)] count: usize) -> Element {
    rsx! {
        div {
            class: "grid",
            for i in 0..count {
                Card {
                    key: "{i}",
                    Skeleton { height: "1.25rem" }
                    Skeleton { height: "0.875rem" }
                    Skeleton { height: "3rem" }
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state", p { "{message}" } }
    }
}

#[component]
pub fn ErrorState(message: String) -> Element {
    rsx! {
        div {
            class: "error-state",
            crate::Icon { icon: crate::icons::FaTriangleExclamation, width: 16, height: 16 }
            p { "{message}" }
        }
    }
}
