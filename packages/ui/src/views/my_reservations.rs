use std::collections::HashMap;

use api::Reservation;
use dioxus::prelude::*;

use crate::components::{use_toast, Badge, Button, ButtonVariant, Card, EmptyState, ErrorState, SkeletonGrid};
use crate::hooks::{use_books, use_my_reservations};
use crate::mutations::{run_mutation, track_pending, use_pending, MutationKind};
use crate::query::{use_query_client, QueryState};

use super::{report, reservation_badge};

#[component]
pub fn MyReservations() -> Element {
    let reservations = use_my_reservations();
    let books = use_books();
    let mut client = use_query_client();
    let toast = use_toast();
    let mut cancelling = use_pending();

    let mut list = match reservations.state() {
        QueryState::Ready(list) => list,
        QueryState::Failed(_) => return rsx! { ErrorState { message: "Failed to load reservations" } },
        QueryState::Loading | QueryState::Disabled => return rsx! { SkeletonGrid { count: 2 } },
    };
    api::sort_newest_first(&mut list);
    let titles: HashMap<String, String> = books
        .data()
        .unwrap_or_default()
        .into_iter()
        .map(|b| (b.id, b.title))
        .collect();

    let cancel = move |reservation: Reservation| async move {
        let outcome = track_pending(
            &mut cancelling,
            &reservation.id,
            run_mutation(
                &mut client,
                MutationKind::CancelReservation,
                api::cancel_reservation(reservation.id.clone()),
            ),
        )
        .await;
        report(toast, outcome, |_| "Reservation cancelled successfully.".to_string());
    };

    if list.is_empty() {
        return rsx! {
            EmptyState { message: "No reservations yet. Reserve a book from the catalog when copies are unavailable." }
        };
    }

    rsx! {
        div {
            class: "stack",
            for reservation in list.iter() {
                ReservationCard {
                    key: "{reservation.id}",
                    title: titles.get(&reservation.book_id).cloned().unwrap_or_else(|| reservation.book_id.clone()),
                    pending: cancelling.read().contains(&reservation.id),
                    reservation: reservation.clone(),
                    on_cancel: cancel,
                }
            }
        }
    }
}

#[component]
fn ReservationCard(
    reservation: Reservation,
    title: String,
    pending: bool,
    on_cancel: EventHandler<Reservation>,
) -> Element {
    let requested = reservation.created_at.format_date();
    let due = reservation.due_date.map(|t| t.format_date());
    let status = reservation.status;
    let can_cancel = reservation.can_cancel();

    rsx! {
        Card {
            div {
                class: "card-header",
                h3 { class: "card-title", "{title}" }
                Badge { variant: reservation_badge(status), "{status.label()}" }
            }
            p { class: "muted", "Requested: {requested}" }
            if let Some(due) = due {
                p { class: "muted", "Due: {due}" }
            }
            if can_cancel {
                div {
                    class: "card-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        small: true,
                        disabled: pending,
                        onclick: move |_| on_cancel.call(reservation.clone()),
                        if pending { "Cancelling..." } else { "Cancel" }
                    }
                }
            }
        }
    }
}
