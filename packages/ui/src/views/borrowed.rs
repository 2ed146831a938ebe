use std::collections::HashMap;

use api::{Book, BorrowRecord, LoanStatus, Time};
use dioxus::prelude::*;

use crate::components::{use_toast, Badge, Card, EmptyState, ErrorState, PendingButton, SkeletonGrid, Tabs};
use crate::hooks::{use_books, use_my_borrow_history};
use crate::mutations::{run_mutation, track_pending, use_pending, MutationKind};
use crate::query::{use_query_client, QueryState};

use super::{loan_badge, report};

/// The caller's loans, split into active ones and returned history.
#[component]
pub fn BorrowedBooksList() -> Element {
    let history = use_my_borrow_history();
    let books = use_books();
    let mut client = use_query_client();
    let toast = use_toast();
    let mut returning = use_pending();
    let tab = use_signal(|| "active".to_string());

    let records = match history.state() {
        QueryState::Ready(records) => records,
        QueryState::Failed(_) => return rsx! { ErrorState { message: "Failed to load borrowed books" } },
        QueryState::Loading | QueryState::Disabled => return rsx! { SkeletonGrid { count: 3 } },
    };
    let titles: HashMap<String, String> = books
        .data()
        .unwrap_or_default()
        .into_iter()
        .map(|b: Book| (b.id, b.title))
        .collect();

    let (active, returned): (Vec<BorrowRecord>, Vec<BorrowRecord>) =
        records.into_iter().partition(|r| !r.is_returned());

    let return_book = move |(record, title): (BorrowRecord, String)| async move {
        let outcome = track_pending(
            &mut returning,
            &record.id,
            run_mutation(
                &mut client,
                MutationKind::ReturnBook,
                api::return_book(record.book_id.clone()),
            ),
        )
        .await;
        report(toast, outcome, |_| format!("Successfully returned \"{title}\""));
    };

    let now = Time::now();
    let tabs = vec![
        ("active".to_string(), format!("Active ({})", active.len())),
        ("history".to_string(), format!("History ({})", returned.len())),
    ];
    let shown = if tab() == "active" { active } else { returned };
    let empty = if tab() == "active" { "No active borrows" } else { "No borrow history" };

    rsx! {
        Tabs { tabs, active: tab }
        if shown.is_empty() {
            EmptyState { message: empty }
        }
        div {
            class: "stack",
            for record in shown.iter() {
                LoanCard {
                    key: "{record.id}",
                    title: titles.get(&record.book_id).cloned().unwrap_or_else(|| record.book_id.clone()),
                    status: record.status_at(now),
                    pending: returning.read().contains(&record.id),
                    record: record.clone(),
                    on_return: return_book,
                }
            }
        }
    }
}

#[component]
fn LoanCard(
    record: BorrowRecord,
    title: String,
    status: LoanStatus,
    pending: bool,
    on_return: EventHandler<(BorrowRecord, String)>,
) -> Element {
    let borrowed = record.borrowed_at.format_date();
    let due = record.due_date.format_date();
    let returned = record.returned_at.map(Time::format_date);
    let payload = (record.clone(), title.clone());
    let class = if status == LoanStatus::Overdue { "loan loan-overdue" } else { "loan" };

    rsx! {
        Card {
            class,
            div {
                class: "card-header",
                h3 { class: "card-title", "{title}" }
                Badge { variant: loan_badge(status), "{status.label()}" }
            }
            p { class: "muted", "Borrowed: {borrowed}" }
            p { class: "muted", "Due: {due}" }
            if let Some(returned) = returned {
                p { class: "muted", "Returned: {returned}" }
            } else {
                div {
                    class: "card-actions",
                    PendingButton {
                        small: true,
                        pending,
                        pending_label: "Returning...",
                        onclick: move |_| on_return.call(payload.clone()),
                        "Return"
                    }
                }
            }
        }
    }
}
