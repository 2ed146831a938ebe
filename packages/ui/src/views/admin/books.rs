use api::validation::{BookForm, FieldErrors};
use api::Book;
use dioxus::prelude::*;

use crate::components::{
    use_toast, Button, ButtonVariant, ConfirmDialog, Dialog, EmptyState, ErrorState, Field, Input,
    SearchInput, Skeleton, Textarea,
};
use crate::filters::{filter_admin_books, showing};
use crate::hooks::use_books;
use crate::mutations::{run_mutation, MutationKind};
use crate::query::{use_query_client, QueryState};
use crate::upload::FileUpload;
use crate::views::report;

#[derive(Clone, Debug, PartialEq)]
enum Modal {
    Closed,
    Add,
    Edit(Book),
    Delete(Book),
}

#[component]
pub fn ManageBooks() -> Element {
    let books = use_books();
    let mut client = use_query_client();
    let toast = use_toast();
    let mut search = use_signal(String::new);
    let mut modal = use_signal(|| Modal::Closed);
    let mut deleting = use_signal(|| false);

    let delete = move |book: Book| async move {
        deleting.set(true);
        let result = run_mutation(&mut client, MutationKind::DeleteBook, api::delete_book(book.id.clone())).await;
        deleting.set(false);
        if result.is_ok() {
            modal.set(Modal::Closed);
        }
        report(toast, Some(result), |_| format!("\"{}\" deleted successfully.", book.title));
    };

    let body = match books.state() {
        QueryState::Failed(_) => rsx! { ErrorState { message: "Failed to load books" } },
        QueryState::Ready(all) => {
            let visible = filter_admin_books(&all, &search());
            let summary = showing(visible.len(), all.len(), "books");
            rsx! {
                p { class: "muted", "{summary}" }
                if visible.is_empty() {
                    EmptyState { message: "No books found" }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Author" }
                                th { "Category" }
                                th { "ISBN" }
                                th { "Copies" }
                                th { "Available" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for book in visible.iter() {
                                BookRow {
                                    key: "{book.id}",
                                    book: book.clone(),
                                    on_edit: move |b: Book| modal.set(Modal::Edit(b)),
                                    on_delete: move |b: Book| modal.set(Modal::Delete(b)),
                                }
                            }
                        }
                    }
                }
            }
        }
        _ => rsx! { Skeleton { height: "12rem" } },
    };

    let dialog = match modal() {
        Modal::Closed => rsx! {},
        Modal::Add => rsx! {
            BookFormDialog { editing: None, on_close: move |_| modal.set(Modal::Closed) }
        },
        Modal::Edit(book) => rsx! {
            BookFormDialog { editing: Some(book), on_close: move |_| modal.set(Modal::Closed) }
        },
        Modal::Delete(book) => {
            let message = format!(
                "Are you sure you want to delete \"{}\"? This cannot be undone.",
                book.title
            );
            rsx! {
                ConfirmDialog {
                    title: "Delete Book",
                    message,
                    pending: deleting(),
                    on_confirm: move |_| delete(book.clone()),
                    on_cancel: move |_| modal.set(Modal::Closed),
                }
            }
        }
    };

    rsx! {
        div {
            class: "admin-panel",
            div {
                class: "panel-header",
                h2 { "Manage Books" }
                Button {
                    onclick: move |_| modal.set(Modal::Add),
                    crate::Icon { icon: crate::icons::FaPlus, width: 12, height: 12 }
                    "Add Book"
                }
            }
            SearchInput {
                value: search(),
                placeholder: "Search by title, author, or category...",
                oninput: move |value| search.set(value),
            }
            {body}
        }

        {dialog}
    }
}

#[component]
fn BookRow(book: Book, on_edit: EventHandler<Book>, on_delete: EventHandler<Book>) -> Element {
    let for_edit = book.clone();
    let for_delete = book.clone();
    rsx! {
        tr {
            td { class: "row-title", "{book.title}" }
            td { "{book.author}" }
            td { "{book.category}" }
            td { class: "mono", "{book.isbn}" }
            td { "{book.total_copies}" }
            td { "{book.available_copies}" }
            td {
                class: "actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    small: true,
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    crate::Icon { icon: crate::icons::FaPenToSquare, width: 12, height: 12 }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    small: true,
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    crate::Icon { icon: crate::icons::FaTrashCan, width: 12, height: 12 }
                }
            }
        }
    }
}

/// Add a book, or edit `editing` when set.
#[component]
fn BookFormDialog(editing: Option<Book>, on_close: EventHandler<()>) -> Element {
    let edit_id = editing.as_ref().map(|b| b.id.clone());
    let mut form = use_signal(|| {
        editing.as_ref().map(BookForm::from_book).unwrap_or_else(|| BookForm {
            total_copies: "1".to_string(),
            ..BookForm::default()
        })
    });
    let mut errors = use_signal(FieldErrors::default);
    let mut saving = use_signal(|| false);
    let mut client = use_query_client();
    let toast = use_toast();
    let is_edit = edit_id.is_some();

    let submit = move |evt: FormEvent| {
        let edit_id = edit_id.clone();
        async move {
            evt.prevent_default();
            let data = match form.read().validate_input() {
                Ok(data) => data,
                Err(e) => {
                    errors.set(e);
                    return;
                }
            };
            errors.set(FieldErrors::default());
            saving.set(true);
            let title = data.title.clone();
            let result = match edit_id {
                Some(id) => run_mutation(&mut client, MutationKind::EditBook, api::edit_book(id, data)).await,
                None => run_mutation(&mut client, MutationKind::AddBook, api::add_book(data)).await,
            };
            saving.set(false);
            if result.is_ok() {
                on_close.call(());
            }
            report(toast, Some(result), |_| {
                if is_edit {
                    format!("\"{title}\" updated successfully!")
                } else {
                    format!("\"{title}\" added to the library!")
                }
            });
        }
    };

    let error = move |field: &str| errors.read().get(field).map(str::to_string);
    let (title, description) = if is_edit {
        ("Edit Book", "Update the details of this book.")
    } else {
        ("Add New Book", "Fill in the details to add a book to the library collection.")
    };

    rsx! {
        Dialog {
            title: title.to_string(),
            description: description.to_string(),
            wide: true,
            on_close: move |_| on_close.call(()),
            form {
                class: "form form-grid",
                onsubmit: submit,
                Field { label: "Title *", html_for: "book-title", error: error("title"),
                    Input { id: "book-title", placeholder: "Book title", value: form.read().title.clone(),
                        oninput: move |evt: FormEvent| form.write().title = evt.value() }
                }
                Field { label: "Author *", html_for: "book-author", error: error("author"),
                    Input { id: "book-author", placeholder: "Author name", value: form.read().author.clone(),
                        oninput: move |evt: FormEvent| form.write().author = evt.value() }
                }
                Field { label: "Category *", html_for: "book-category", error: error("category"),
                    Input { id: "book-category", placeholder: "e.g. Computer Science", value: form.read().category.clone(),
                        oninput: move |evt: FormEvent| form.write().category = evt.value() }
                }
                Field { label: "ISBN *", html_for: "book-isbn", error: error("isbn"),
                    Input { id: "book-isbn", placeholder: "978-...", value: form.read().isbn.clone(),
                        oninput: move |evt: FormEvent| form.write().isbn = evt.value() }
                }
                Field { label: "Total Copies *", html_for: "book-copies", error: error("total_copies"),
                    Input { id: "book-copies", r#type: "number", value: form.read().total_copies.clone(),
                        oninput: move |evt: FormEvent| form.write().total_copies = evt.value() }
                }
                Field { label: "Attachment", html_for: "book-file",
                    FileUpload {
                        current: form.read().file.clone(),
                        on_uploaded: move |blob| form.write().file = blob,
                    }
                }
                Field { label: "Description", html_for: "book-description",
                    Textarea { id: "book-description", placeholder: "Brief description of the book...",
                        value: form.read().description.clone(),
                        oninput: move |evt: FormEvent| form.write().description = evt.value() }
                }
                div {
                    class: "modal-actions",
                    Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Cancel" }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() {
                            if is_edit { "Saving..." } else { "Adding..." }
                        } else if is_edit {
                            "Save Changes"
                        } else {
                            "Add Book"
                        }
                    }
                }
            }
        }
    }
}
