use api::{LoanStatus, Time};
use dioxus::prelude::*;

use crate::components::{Badge, EmptyState, ErrorState, SearchInput, Select, Skeleton};
use crate::filters::{self, filter_records, flatten_records, showing};
use crate::hooks::{use_all_borrow_records, use_books};
use crate::query::QueryState;
use crate::views::loan_badge;

#[component]
pub fn BorrowRecords() -> Element {
    let records = use_all_borrow_records();
    let books = use_books();
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| filters::ALL.to_string());

    let status_options: Vec<(String, String)> = std::iter::once((filters::ALL.to_string(), "All Status".to_string()))
        .chain(
            [LoanStatus::Active, LoanStatus::Returned, LoanStatus::Overdue]
                .into_iter()
                .map(|s| (s.as_str().to_string(), s.label().to_string())),
        )
        .collect();

    let body = match records.state() {
        QueryState::Ready(groups) => {
            let now = Time::now();
            let rows = flatten_records(&groups, &books.data().unwrap_or_default());
            let visible = filter_records(&rows, &status(), &search(), now);
            let summary = showing(visible.len(), rows.len(), "records");
            rsx! {
                p { class: "muted", "{summary}" }
                if visible.is_empty() {
                    EmptyState { message: "No borrow records found" }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Book" }
                                th { "Borrower" }
                                th { "Borrowed" }
                                th { "Due" }
                                th { "Returned" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for row in visible {
                                tr {
                                    key: "{row.record.id}",
                                    td { class: "row-title", {row.book_title.clone().unwrap_or_else(|| row.record.book_id.clone())} }
                                    td { class: "mono", title: "{row.principal}", "{row.principal.short()}" }
                                    td { "{row.record.borrowed_at.format_date()}" }
                                    td { "{row.record.due_date.format_date()}" }
                                    td { {row.record.returned_at.map(Time::format_date).unwrap_or_else(|| "-".to_string())} }
                                    td {
                                        Badge {
                                            variant: loan_badge(row.record.status_at(now)),
                                            "{row.record.status_at(now).label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        QueryState::Failed(_) => rsx! { ErrorState { message: "Failed to load borrow records" } },
        _ => rsx! { Skeleton { height: "12rem" } },
    };

    rsx! {
        div {
            class: "admin-panel",
            div { class: "panel-header", h2 { "Borrow Records" } }
            div {
                class: "toolbar",
                SearchInput {
                    value: search(),
                    placeholder: "Search by book title or principal...",
                    oninput: move |value| search.set(value),
                }
                Select {
                    value: status(),
                    options: status_options,
                    onchange: move |value| status.set(value),
                }
            }
            {body}
        }
    }
}
