use api::validation::{FieldErrors, ResourceForm};
use api::DigitalResource;
use dioxus::prelude::*;

use crate::components::{
    use_toast, Button, ButtonVariant, ConfirmDialog, Dialog, EmptyState, ErrorState, Field, Input, Select,
    Skeleton, Textarea,
};
use crate::hooks::use_digital_resources;
use crate::mutations::{run_mutation, MutationKind};
use crate::query::{use_query_client, QueryState};
use crate::views::report;

#[derive(Clone, Debug, PartialEq)]
enum Modal {
    Closed,
    Add,
    Edit(DigitalResource),
    Delete(DigitalResource),
}

#[component]
pub fn ManageResources() -> Element {
    let resources = use_digital_resources();
    let mut client = use_query_client();
    let toast = use_toast();
    let mut modal = use_signal(|| Modal::Closed);
    let mut deleting = use_signal(|| false);

    let delete = move |resource: DigitalResource| async move {
        deleting.set(true);
        let result = run_mutation(
            &mut client,
            MutationKind::DeleteResource,
            api::delete_digital_resource(resource.id.clone()),
        )
        .await;
        deleting.set(false);
        if result.is_ok() {
            modal.set(Modal::Closed);
        }
        report(toast, Some(result), |_| format!("\"{}\" deleted successfully.", resource.title));
    };

    let body = match resources.state() {
        QueryState::Ready(all) if all.is_empty() => rsx! {
            EmptyState { message: "No digital resources yet" }
        },
        QueryState::Ready(all) => rsx! {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Category" }
                        th { "URL" }
                        th { "Added" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for resource in all.iter() {
                        ResourceRow {
                            key: "{resource.id}",
                            resource: resource.clone(),
                            on_edit: move |r: DigitalResource| modal.set(Modal::Edit(r)),
                            on_delete: move |r: DigitalResource| modal.set(Modal::Delete(r)),
                        }
                    }
                }
            }
        },
        QueryState::Failed(_) => rsx! { ErrorState { message: "Failed to load digital resources" } },
        _ => rsx! { Skeleton { height: "12rem" } },
    };

    let dialog = match modal() {
        Modal::Closed => rsx! {},
        Modal::Add => rsx! {
            ResourceFormDialog { editing: None, on_close: move |_| modal.set(Modal::Closed) }
        },
        Modal::Edit(resource) => rsx! {
            ResourceFormDialog { editing: Some(resource), on_close: move |_| modal.set(Modal::Closed) }
        },
        Modal::Delete(resource) => {
            let message = format!("Delete \"{}\"? This cannot be undone.", resource.title);
            rsx! {
                ConfirmDialog {
                    title: "Delete Resource",
                    message,
                    pending: deleting(),
                    on_confirm: move |_| delete(resource.clone()),
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
                h2 { "Digital Resources" }
                Button {
                    onclick: move |_| modal.set(Modal::Add),
                    crate::Icon { icon: crate::icons::FaPlus, width: 12, height: 12 }
                    "Add Resource"
                }
            }
            {body}
        }

        {dialog}
    }
}

#[component]
fn ResourceRow(
    resource: DigitalResource,
    on_edit: EventHandler<DigitalResource>,
    on_delete: EventHandler<DigitalResource>,
) -> Element {
    let for_edit = resource.clone();
    let for_delete = resource.clone();
    rsx! {
        tr {
            td { class: "row-title", "{resource.title}" }
            td { "{resource.category}" }
            td {
                a { class: "truncate", href: "{resource.url}", target: "_blank", rel: "noopener noreferrer", "{resource.url}" }
            }
            td { "{resource.added_at.format_date()}" }
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

#[component]
fn ResourceFormDialog(editing: Option<DigitalResource>, on_close: EventHandler<()>) -> Element {
    let edit_id = editing.as_ref().map(|r| r.id.clone());
    let mut form = use_signal(|| {
        editing
            .as_ref()
            .map(ResourceForm::from_resource)
            .unwrap_or_default()
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
                    run_mutation(&mut client, MutationKind::EditResource, api::edit_digital_resource(id, data)).await
                }
                None => run_mutation(&mut client, MutationKind::AddResource, api::add_digital_resource(data))
                    .await
                    .map(|_| ()),
            };
            saving.set(false);
            if result.is_ok() {
                on_close.call(());
            }
            report(toast, Some(result), |_| {
                if is_edit {
                    format!("\"{title}\" updated successfully!")
                } else {
                    format!("\"{title}\" added successfully!")
                }
            });
        }
    };

    let error = move |field: &str| errors.read().get(field).map(str::to_string);
    let categories: Vec<(String, String)> = api::RESOURCE_CATEGORIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect();

    rsx! {
        Dialog {
            title: if is_edit { "Edit Resource".to_string() } else { "Add Digital Resource".to_string() },
            on_close: move |_| on_close.call(()),
            form {
                class: "form",
                onsubmit: submit,
                Field { label: "Title *", html_for: "resource-title", error: error("title"),
                    Input { id: "resource-title", placeholder: "Resource title", value: form.read().title.clone(),
                        oninput: move |evt: FormEvent| form.write().title = evt.value() }
                }
                Field { label: "URL *", html_for: "resource-url", error: error("url"),
                    Input { id: "resource-url", r#type: "url", placeholder: "https://...", value: form.read().url.clone(),
                        oninput: move |evt: FormEvent| form.write().url = evt.value() }
                }
                Field { label: "Category *", html_for: "resource-category", error: error("category"),
                    Select {
                        id: "resource-category",
                        value: form.read().category.clone(),
                        options: categories,
                        placeholder: "Select a category".to_string(),
                        onchange: move |value| form.write().category = value,
                    }
                }
                Field { label: "Description *", html_for: "resource-description", error: error("description"),
                    Textarea { id: "resource-description", placeholder: "What does this resource cover?",
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
                            "Saving..."
                        } else if is_edit {
                            "Save Changes"
                        } else {
                            "Add Resource"
                        }
                    }
                }
            }
        }
    }
}
