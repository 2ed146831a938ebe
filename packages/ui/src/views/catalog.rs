use api::Book;
use dioxus::prelude::*;

use crate::components::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, EmptyState, ErrorState,
    PendingButton, SearchInput, Select, SkeletonGrid,
};
use crate::filters::{self, categories, filter_catalog, showing};
use crate::hooks::use_books;
use crate::mutations::{run_mutation, track_pending, use_pending, MutationKind};
use crate::query::{use_query_client, QueryState};

use super::report;

/// Searchable book grid with borrow and reserve actions.
#[component]
pub fn BookCatalog() -> Element {
    let books = use_books();
    let mut client = use_query_client();
    let toast = use_toast();
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| filters::ALL.to_string());
    let mut borrowing = use_pending();
    let mut reserving = use_pending();

    let borrow = move |book: Book| async move {
        let outcome = track_pending(
            &mut borrowing,
            &book.id,
            run_mutation(&mut client, MutationKind::BorrowBook, api::borrow_book(book.id.clone())),
        )
        .await;
        report(toast, outcome, |_| format!("Successfully borrowed \"{}\"", book.title));
    };

    let reserve = move |book: Book| async move {
        let outcome = track_pending(
            &mut reserving,
            &book.id,
            run_mutation(
                &mut client,
                MutationKind::CreateReservation,
                api::create_reservation(book.id.clone()),
            ),
        )
        .await;
        report(toast, outcome, |_| format!("Reservation requested for \"{}\"", book.title));
    };

    let all = match books.state() {
        QueryState::Loading | QueryState::Disabled => return rsx! { SkeletonGrid {} },
        QueryState::Failed(_) => return rsx! { ErrorState { message: "Failed to load books" } },
        QueryState::Ready(all) => all,
    };

    let mut options = vec![(filters::ALL.to_string(), "All Categories".to_string())];
    options.extend(
        categories(all.iter().map(|b| b.category.as_str()))
            .into_iter()
            .map(|c| (c.clone(), c)),
    );
    let visible = filter_catalog(&all, &search(), &category());
    let summary = showing(visible.len(), all.len(), "books");

    rsx! {
        div {
            class: "toolbar",
            SearchInput {
                value: search(),
                placeholder: "Search by title, author, or ISBN...",
                oninput: move |value| search.set(value),
            }
            Select {
                value: category(),
                options,
                onchange: move |value| category.set(value),
            }
        }
        p { class: "muted", "{summary}" }
        if visible.is_empty() {
            EmptyState { message: "No books found" }
        } else {
            div {
                class: "grid",
                for book in visible.iter() {
                    BookCard {
                        key: "{book.id}",
                        borrowing: borrowing.read().contains(&book.id),
                        reserving: reserving.read().contains(&book.id),
                        book: book.clone(),
                        on_borrow: borrow,
                        on_reserve: reserve,
                    }
                }
            }
        }
    }
}

#[component]
fn BookCard(
    book: Book,
    borrowing: bool,
    reserving: bool,
    on_borrow: EventHandler<Book>,
    on_reserve: EventHandler<Book>,
) -> Element {
    let available = book.is_available();
    let label = book.availability_label();
    let for_borrow = book.clone();
    let for_reserve = book.clone();

    rsx! {
        Card {
            class: "book-card",
            div {
                class: "card-header",
                h3 { class: "card-title", "{book.title}" }
                Badge {
                    variant: if available { BadgeVariant::Success } else { BadgeVariant::Danger },
                    "{label}"
                }
            }
            p { class: "muted", "by {book.author}" }
            div {
                class: "meta",
                Badge { "{book.category}" }
                span { class: "mono", "ISBN {book.isbn}" }
            }
            if !book.description.is_empty() {
                p { class: "description", "{book.description}" }
            }
            if let Some(file) = &book.file {
                a {
                    class: "attachment",
                    href: "{file.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    crate::Icon { icon: crate::icons::FaPaperclip, width: 12, height: 12 }
                    "{file.file_name()}"
                }
            }
            div {
                class: "card-actions",
                PendingButton {
                    pending: borrowing,
                    pending_label: "Borrowing...",
                    disabled: !available,
                    onclick: move |_| on_borrow.call(for_borrow.clone()),
                    crate::Icon { icon: crate::icons::FaBookOpen, width: 14, height: 14 }
                    "Borrow"
                }
                if !available {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: reserving,
                        onclick: move |_| on_reserve.call(for_reserve.clone()),
                        if reserving { "Reserving..." } else { "Reserve" }
                    }
                }
            }
        }
    }
}
