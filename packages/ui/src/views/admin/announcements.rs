use api::validation::{AnnouncementForm, FieldErrors};
use api::{Announcement, AnnouncementPriority, Time};
use dioxus::prelude::*;

use crate::components::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, ConfirmDialog, Dialog, EmptyState, ErrorState,
    Field, Input, Select, SkeletonGrid, Textarea,
};
use crate::hooks::use_announcements;
use crate::mutations::{run_mutation, MutationKind};
use crate::query::{use_query_client, QueryState};
use crate::views::report;

#[derive(Clone, Debug, PartialEq)]
enum Modal {
    Closed,
    Add,
    Edit(Announcement),
    Delete(Announcement),
}

#[component]
pub fn ManageAnnouncements() -> Element {
    let announcements = use_announcements();
    let mut client = use_query_client();
    let toast = use_toast();
    let mut modal = use_signal(|| Modal::Closed);
    let mut deleting = use_signal(|| false);

    let delete = move |announcement: Announcement| async move {
        deleting.set(true);
        let result = run_mutation(
            &mut client,
            MutationKind::DeleteAnnouncement,
            api::delete_announcement(announcement.id.clone()),
        )
        .await;
        deleting.set(false);
        if result.is_ok() {
            modal.set(Modal::Closed);
        }
        report(toast, Some(result), |_| "Announcement deleted.".to_string());
    };

    let body = match announcements.state() {
        QueryState::Ready(all) if all.is_empty() => rsx! {
            EmptyState { message: "No announcements yet" }
        },
        QueryState::Ready(all) => {
            let sorted = api::latest_first(all, None);
            rsx! {
                div {
                    class: "stack",
                    for notice in sorted.iter() {
                        AnnouncementCard {
                            key: "{notice.id}",
                            announcement: notice.clone(),
                            on_edit: move |a: Announcement| modal.set(Modal::Edit(a)),
                            on_delete: move |a: Announcement| modal.set(Modal::Delete(a)),
                        }
                    }
                }
            }
        }
        QueryState::Failed(_) => rsx! { ErrorState { message: "Failed to load announcements" } },
        _ => rsx! { SkeletonGrid { count: 3 } },
    };

    let dialog = match modal() {
        Modal::Closed => rsx! {},
        Modal::Add => rsx! {
            AnnouncementFormDialog { editing: None, on_close: move |_| modal.set(Modal::Closed) }
        },
        Modal::Edit(announcement) => rsx! {
            AnnouncementFormDialog { editing: Some(announcement), on_close: move |_| modal.set(Modal::Closed) }
        },
        Modal::Delete(announcement) => {
            let message = format!("Delete the announcement \"{}\"?", announcement.title);
            rsx! {
                ConfirmDialog {
                    title: "Delete Announcement",
                    message,
                    pending: deleting(),
                    on_confirm: move |_| delete(announcement.clone()),
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
                h2 { "Announcements" }
                Button {
                    onclick: move |_| modal.set(Modal::Add),
                    crate::Icon { icon: crate::icons::FaPlus, width: 12, height: 12 }
                    "New Announcement"
                }
            }
            {body}
        }

        {dialog}
    }
}

#[component]
fn AnnouncementCard(
    announcement: Announcement,
    on_edit: EventHandler<Announcement>,
    on_delete: EventHandler<Announcement>,
) -> Element {
    let urgent = announcement.is_urgent();
    let published = announcement.publish_date.format_date();
    let for_edit = announcement.clone();
    let for_delete = announcement.clone();

    rsx! {
        Card {
            class: if urgent { "notice notice-urgent".to_string() } else { "notice".to_string() },
            div {
                class: "card-header",
                h3 { class: "card-title", "{announcement.title}" }
                if urgent {
                    Badge { variant: BadgeVariant::Danger, "Urgent" }
                }
            }
            p { class: "muted", "Published {published}" }
            p { class: "notice-body", "{announcement.body}" }
            div {
                class: "card-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    small: true,
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    small: true,
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn AnnouncementFormDialog(editing: Option<Announcement>, on_close: EventHandler<()>) -> Element {
    let edit_id = editing.as_ref().map(|a| a.id.clone());
    let mut form = use_signal(|| {
        editing
            .as_ref()
            .map(AnnouncementForm::from_announcement)
            .unwrap_or_else(|| AnnouncementForm {
                publish_date: Time::now().to_date_input(),
                ..AnnouncementForm::default()
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
                Some(id) => {
                    run_mutation(&mut client, MutationKind::EditAnnouncement, api::edit_announcement(id, data)).await
                }
                None => run_mutation(&mut client, MutationKind::AddAnnouncement, api::add_announcement(data))
                    .await
                    .map(|_| ()),
            };
            saving.set(false);
            if result.is_ok() {
                on_close.call(());
            }
            report(toast, Some(result), |_| {
                if is_edit {
                    "Announcement updated successfully!".to_string()
                } else {
                    format!("Announcement \"{title}\" published!")
                }
            });
        }
    };

    let error = move |field: &str| errors.read().get(field).map(str::to_string);
    let priorities = vec![
        (AnnouncementPriority::Normal.as_str().to_string(), "Normal".to_string()),
        (AnnouncementPriority::Urgent.as_str().to_string(), "Urgent".to_string()),
    ];

    rsx! {
        Dialog {
            title: if is_edit { "Edit Announcement".to_string() } else { "New Announcement".to_string() },
            on_close: move |_| on_close.call(()),
            form {
                class: "form",
                onsubmit: submit,
                Field { label: "Title *", html_for: "notice-title", error: error("title"),
                    Input { id: "notice-title", placeholder: "Announcement title", value: form.read().title.clone(),
                        oninput: move |evt: FormEvent| form.write().title = evt.value() }
                }
                Field { label: "Message *", html_for: "notice-body", error: error("body"),
                    Textarea { id: "notice-body", placeholder: "Write the announcement...", rows: 6,
                        value: form.read().body.clone(),
                        oninput: move |evt: FormEvent| form.write().body = evt.value() }
                }
                div {
                    class: "form-row",
                    Field { label: "Priority", html_for: "notice-priority",
                        Select {
                            id: "notice-priority",
                            value: form.read().priority.as_str().to_string(),
                            options: priorities,
                            onchange: move |value: String| {
                                if let Some(priority) = AnnouncementPriority::parse(&value) {
                                    form.write().priority = priority;
                                }
                            },
                        }
                    }
                    Field { label: "Publish Date *", html_for: "notice-date", error: error("publish_date"),
                        Input { id: "notice-date", r#type: "date", value: form.read().publish_date.clone(),
                            oninput: move |evt: FormEvent| form.write().publish_date = evt.value() }
                    }
                }
                div {
                    class: "modal-actions",
                    Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Cancel" }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() {
                            "Saving..."
                        } else if is_edit {
                            "Save Changes"
                        } else {
                            "Publish"
                        }
                    }
                }
            }
        }
    }
}
