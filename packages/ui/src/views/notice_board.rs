use dioxus::prelude::*;

use crate::components::{Badge, BadgeVariant, Card, EmptyState, ErrorState, SkeletonGrid};
use crate::hooks::use_announcements;
use crate::query::QueryState;

/// Announcements, latest publish date first. `limit` keeps only the newest.
#[component]
pub fn NoticeBoard(#[props(default)] limit: Option<usize>) -> Element {
    let announcements = use_announcements();

    let list = match announcements.state() {
        QueryState::Ready(list) => api::latest_first(list, limit),
        QueryState::Failed(_) => {
            return rsx! { ErrorState { message: "Failed to load announcements" } }
        }
        _ => return rsx! { SkeletonGrid { count: limit.unwrap_or(3) } },
    };

    if list.is_empty() {
        return rsx! { EmptyState { message: "No announcements at this time" } };
    }

    rsx! {
        div {
            class: "stack",
            for notice in list {
                Card {
                    key: "{notice.id}",
                    class: if notice.is_urgent() { "notice notice-urgent".to_string() } else { "notice".to_string() },
                    div {
                        class: "card-header",
                        h3 { class: "card-title", "{notice.title}" }
                        if notice.is_urgent() {
                            Badge {
                                variant: BadgeVariant::Danger,
                                crate::Icon { icon: crate::icons::FaTriangleExclamation, width: 10, height: 10 }
                                "Urgent"
                            }
                        }
                    }
                    p { class: "muted", "{notice.publish_date.format_date()}" }
                    p { class: "notice-body", "{notice.body}" }
                }
            }
        }
    }
}
