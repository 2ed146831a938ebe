use std::collections::HashMap;

use api::{Reservation, ReservationStatus};
use dioxus::prelude::*;

use crate::components::{
    use_toast, Badge, Button, ButtonVariant, ConfirmDialog, EmptyState, ErrorState, SearchInput, Select, Skeleton,
    ToastOptions,
};
use crate::filters::{self, filter_reservations, showing};
use crate::hooks::{use_all_reservations, use_all_users, use_books};
use crate::mutations::{run_mutation, MutationKind};
use crate::query::{use_query_client, QueryState};
use crate::views::reservation_badge;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn kind(self) -> MutationKind {
        match self {
            Decision::Approve => MutationKind::ApproveReservation,
            Decision::Reject => MutationKind::RejectReservation,
        }
    }

    /// Toast text for a rejected decision, preferring the backend's message.
    fn failure_message(self, message: &str) -> String {
        let message = message.trim();
        if !message.is_empty() {
            return message.to_string();
        }
        match self {
            Decision::Approve => "Failed to approve reservation.".to_string(),
            Decision::Reject => "Failed to reject reservation.".to_string(),
        }
    }
}

#[component]
pub fn ManageReservations() -> Element {
    let reservations = use_all_reservations();
    let books = use_books();
    let users = use_all_users();
    let mut client = use_query_client();
    let toast = use_toast();
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| filters::ALL.to_string());
    let mut confirming = use_signal(|| None::<(Reservation, Decision)>);
    let mut deciding = use_signal(|| false);

    let decide = move |(reservation, decision): (Reservation, Decision)| async move {
        deciding.set(true);
        let id = reservation.id.clone();
        let result = match decision {
            Decision::Approve => run_mutation(&mut client, decision.kind(), api::approve_reservation(id)).await,
            Decision::Reject => run_mutation(&mut client, decision.kind(), api::reject_reservation(id)).await,
        };
        deciding.set(false);
        confirming.set(None);
        match (result, decision) {
            (Ok(()), Decision::Approve) => {
                toast.success("Reservation approved.".to_string(), ToastOptions::new());
            }
            (Ok(()), Decision::Reject) => {
                toast.success("Reservation rejected.".to_string(), ToastOptions::new());
            }
            (Err(message), decision) => {
                toast.error(decision.failure_message(&message), ToastOptions::new());
            }
        }
    };

    let status_options: Vec<(String, String)> =
        std::iter::once((filters::ALL.to_string(), "All Status".to_string()))
            .chain(
                ReservationStatus::ALL
                    .into_iter()
                    .map(|s| (s.as_str().to_string(), s.label().to_string())),
            )
            .collect();

    let body = match reservations.state() {
        QueryState::Ready(all) => {
            let books = books.data().unwrap_or_default();
            let users = users.data().unwrap_or_default();
            let visible = filter_reservations(&all, &books, &users, &search(), &status());
            let titles: HashMap<&str, &str> = books.iter().map(|b| (b.id.as_str(), b.title.as_str())).collect();
            let names: HashMap<&str, &str> = users
                .iter()
                .map(|u| (u.principal.as_str(), u.profile.name.as_str()))
                .collect();
            let summary = showing(visible.len(), all.len(), "reservations");
            rsx! {
                p { class: "muted", "{summary}" }
                if visible.is_empty() {
                    EmptyState { message: "No reservations found" }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Book" }
                                th { "Student" }
                                th { "Requested" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for reservation in visible.iter() {
                                ReservationRow {
                                    key: "{reservation.id}",
                                    title: titles.get(reservation.book_id.as_str()).copied().unwrap_or(reservation.book_id.as_str()).to_string(),
                                    student: names.get(reservation.user_id.as_str()).map(|n| n.to_string()).unwrap_or_else(|| reservation.user_id.short()),
                                    reservation: reservation.clone(),
                                    on_decide: move |choice| confirming.set(Some(choice)),
                                }
                            }
                        }
                    }
                }
            }
        }
        QueryState::Failed(_) => rsx! { ErrorState { message: "Failed to load reservations" } },
        _ => rsx! { Skeleton { height: "12rem" } },
    };

    let dialog = match confirming() {
        None => rsx! {},
        Some((reservation, decision)) => {
            let (title, message, label, pending_label) = match decision {
                Decision::Approve => (
                    "Approve Reservation",
                    "Approve this reservation? The student will be able to collect the book.",
                    "Approve",
                    "Approving...",
                ),
                Decision::Reject => (
                    "Reject Reservation",
                    "Reject this reservation? This cannot be undone.",
                    "Reject",
                    "Rejecting...",
                ),
            };
            rsx! {
                ConfirmDialog {
                    title: title.to_string(),
                    message: message.to_string(),
                    confirm_label: label.to_string(),
                    pending_label: pending_label.to_string(),
                    pending: deciding(),
                    on_confirm: move |_| decide((reservation.clone(), decision)),
                    on_cancel: move |_| confirming.set(None),
                }
            }
        }
    };

    rsx! {
        div {
            class: "admin-panel",
            div { class: "panel-header", h2 { "Reservations" } }
            div {
                class: "toolbar",
                SearchInput {
                    value: search(),
                    placeholder: "Search by book, student, or reservation ID...",
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

        {dialog}
    }
}

#[component]
fn ReservationRow(
    reservation: Reservation,
    title: String,
    student: String,
    on_decide: EventHandler<(Reservation, Decision)>,
) -> Element {
    let status = reservation.status;
    let requested = reservation.created_at.format_date();
    let for_approve = reservation.clone();
    let for_reject = reservation.clone();

    rsx! {
        tr {
            td { class: "row-title", "{title}" }
            td { "{student}" }
            td { "{requested}" }
            td { Badge { variant: reservation_badge(status), "{status.label()}" } }
            td {
                class: "actions",
                if reservation.awaits_decision() {
                    Button {
                        small: true,
                        onclick: move |_| on_decide.call((for_approve.clone(), Decision::Approve)),
                        "Approve"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        small: true,
                        onclick: move |_| on_decide.call((for_reject.clone(), Decision::Reject)),
                        "Reject"
                    }
                } else {
                    span { class: "muted", "-" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_shows_backend_message() {
        assert_eq!(
            Decision::Approve.failure_message("No copies available to approve this reservation"),
            "No copies available to approve this reservation"
        );
        assert_eq!(Decision::Reject.failure_message("Unauthorized"), "Unauthorized");
    }

    #[test]
    fn test_failure_falls_back_when_blank() {
        assert_eq!(Decision::Approve.failure_message(""), "Failed to approve reservation.");
        assert_eq!(Decision::Reject.failure_message("  "), "Failed to reject reservation.");
    }
}
