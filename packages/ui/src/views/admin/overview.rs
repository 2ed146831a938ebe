use dioxus::prelude::*;

use crate::components::{Card, ErrorState, Skeleton};
use crate::counter::AnimatedCounter;
use crate::hooks::{use_active_user_count, use_dashboard_stats};
use crate::query::QueryState;

#[component]
fn StatCard(label: String, caption: String, value: u64) -> Element {
    rsx! {
        Card {
            class: "stat-card",
            p { class: "stat-label", "{label}" }
            div { class: "stat-value", AnimatedCounter { value } }
            p { class: "muted", "{caption}" }
        }
    }
}

#[component]
pub fn Overview() -> Element {
    let stats = use_dashboard_stats();
    let active = use_active_user_count();

    let cards = match stats.state() {
        QueryState::Ready(s) => rsx! {
            StatCard { label: "Total Books", caption: "Total books in collection", value: s.total_books }
            StatCard { label: "Total Users", caption: "Registered library members", value: s.total_users }
            StatCard { label: "Books Borrowed", caption: "Currently borrowed", value: s.books_borrowed }
            StatCard { label: "Overdue", caption: "Overdue returns", value: s.overdue_count }
        },
        QueryState::Failed(_) => rsx! { ErrorState { message: "Failed to load stats" } },
        _ => rsx! {
            for i in 0..4 {
                Card { key: "{i}", Skeleton { height: "5rem" } }
            }
        },
    };

    rsx! {
        div {
            class: "admin-panel",
            div {
                class: "panel-header",
                div {
                    h2 { "Library Overview" }
                    p { class: "muted", "Real-time statistics for VEMU Library" }
                }
                div {
                    class: "live",
                    span { class: "live-dot" }
                    match active.data() {
                        Some(count) => rsx! { "{count} active now" },
                        None => rsx! { "Counting active users..." },
                    }
                }
            }
            div { class: "grid grid-4", {cards} }
        }
    }
}
