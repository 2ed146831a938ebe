use std::collections::HashMap;

use api::{LoanStatus, Time};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{Badge, BadgeVariant, Card, EmptyState, ErrorState, Skeleton};
use crate::hooks::{use_books, use_caller_profile, use_my_borrow_history};
use crate::query::QueryState;

use super::MyReservations;

/// The caller's profile card, loans, and reservations.
#[component]
pub fn StudentProfile() -> Element {
    let auth = use_auth();
    let profile = use_caller_profile();
    let history = use_my_borrow_history();
    let books = use_books();

    let titles: HashMap<String, String> = books
        .data()
        .unwrap_or_default()
        .into_iter()
        .map(|b| (b.id, b.title))
        .collect();
    let title_of = move |book_id: &str| titles.get(book_id).cloned().unwrap_or_else(|| book_id.to_string());

    let now = Time::now();
    let records = history.state();
    let (active, returned): (Vec<_>, Vec<_>) = history
        .data()
        .unwrap_or_default()
        .into_iter()
        .partition(|r| !r.is_returned());
    let principal = auth.read().principal().map(|p| p.short()).unwrap_or_default();
    let loans = match active.len() {
        1 => "1 Active Loan".to_string(),
        n => format!("{n} Active Loans"),
    };

    rsx! {
        div {
            class: "page",
            Card {
                class: "profile-card",
                match profile.state() {
                    QueryState::Ready(Some(p)) => rsx! {
                        h2 { "{p.name}" }
                        p { class: "muted", "{p.email}" }
                        div {
                            class: "meta",
                            Badge { variant: BadgeVariant::Info, "{p.role}" }
                            span { class: "muted", "Member since {p.joined_at.format_date()}" }
                        }
                    },
                    QueryState::Ready(None) => rsx! { p { class: "muted", "No profile yet" } },
                    QueryState::Failed(_) => rsx! { ErrorState { message: "Failed to load profile" } },
                    QueryState::Loading | QueryState::Disabled => rsx! { Skeleton { height: "3rem" } },
                }
                p { class: "mono muted", "{principal}" }
                Badge { "{loans}" }
            }

            section {
                class: "section",
                h3 { "Active Loans" }
                if matches!(records, QueryState::Failed(_)) {
                    ErrorState { message: "Failed to load loans" }
                } else if !matches!(records, QueryState::Ready(_)) {
                    Skeleton { height: "4rem" }
                } else if active.is_empty() {
                    EmptyState { message: "No active loans" }
                } else {
                    for record in active.iter() {
                        div {
                            key: "{record.id}",
                            class: if record.status_at(now) == LoanStatus::Overdue { "row row-overdue" } else { "row" },
                            span { class: "row-title", "{title_of(&record.book_id)}" }
                            span { class: "muted", "Due {record.due_date.format_date()}" }
                            if record.status_at(now) == LoanStatus::Overdue {
                                Badge { variant: BadgeVariant::Danger, "Overdue" }
                            }
                        }
                    }
                }
            }

            section {
                class: "section",
                h3 { "Borrowing History" }
                if returned.is_empty() {
                    EmptyState { message: "No returned books yet" }
                } else {
                    for record in returned.iter() {
                        div {
                            key: "{record.id}",
                            class: "row",
                            span { class: "row-title", "{title_of(&record.book_id)}" }
                            span { class: "muted", "Borrowed {record.borrowed_at.format_date()}" }
                            if let Some(at) = record.returned_at {
                                span { class: "muted", "Returned {at.format_date()}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "section",
                h3 { "My Reservations" }
                MyReservations {}
            }
        }
    }
}
