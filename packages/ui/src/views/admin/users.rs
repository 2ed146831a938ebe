use api::{UserEntry, UserRole};
use dioxus::prelude::*;

use crate::components::{use_toast, Badge, BadgeVariant, EmptyState, ErrorState, SearchInput, Skeleton};
use crate::filters::{filter_users, showing};
use crate::hooks::use_all_users;
use crate::mutations::{run_mutation, track_pending, use_pending, MutationKind};
use crate::query::{use_query_client, QueryState};
use crate::views::report;

fn role_badge(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Info,
        UserRole::User => BadgeVariant::Success,
        UserRole::Guest => BadgeVariant::Neutral,
    }
}

#[component]
pub fn ManageUsers() -> Element {
    let users = use_all_users();
    let mut client = use_query_client();
    let toast = use_toast();
    let mut search = use_signal(String::new);
    let mut assigning = use_pending();

    let assign = move |(entry, role): (UserEntry, UserRole)| async move {
        let principal = entry.principal.to_string();
        let outcome = track_pending(
            &mut assigning,
            &principal,
            run_mutation(
                &mut client,
                MutationKind::AssignRole,
                api::assign_user_role(principal.clone(), role),
            ),
        )
        .await;
        report(toast, outcome, |_| format!("{} is now {}", entry.profile.name, role));
    };

    let body = match users.state() {
        QueryState::Ready(all) => {
            let visible = filter_users(&all, &search());
            let summary = showing(visible.len(), all.len(), "users");
            rsx! {
                p { class: "muted", "{summary}" }
                if visible.is_empty() {
                    EmptyState { message: "No users found" }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Principal" }
                                th { "Joined" }
                                th { "Role" }
                                th { "Assign" }
                            }
                        }
                        tbody {
                            for entry in visible.iter() {
                                UserRow {
                                    key: "{entry.principal}",
                                    pending: assigning.read().contains(entry.principal.as_str()),
                                    entry: entry.clone(),
                                    on_assign: assign,
                                }
                            }
                        }
                    }
                }
            }
        }
        QueryState::Failed(_) => rsx! { ErrorState { message: "Failed to load users" } },
        _ => rsx! { Skeleton { height: "12rem" } },
    };

    rsx! {
        div {
            class: "admin-panel",
            div { class: "panel-header", h2 { "Manage Users" } }
            SearchInput {
                value: search(),
                placeholder: "Search by name, email, or principal...",
                oninput: move |value| search.set(value),
            }
            {body}
        }
    }
}

#[component]
fn UserRow(entry: UserEntry, pending: bool, on_assign: EventHandler<(UserEntry, UserRole)>) -> Element {
    let profile = entry.profile.clone();
    let short = entry.principal.short();
    let current = profile.role;

    rsx! {
        tr {
            td { class: "row-title", "{profile.name}" }
            td { "{profile.email}" }
            td { class: "mono", title: "{entry.principal}", "{short}" }
            td { "{profile.joined_at.format_date()}" }
            td { Badge { variant: role_badge(current), "{current}" } }
            td {
                select {
                    class: "input select",
                    disabled: pending,
                    value: "{current}",
                    onchange: move |evt| {
                        if let Some(role) = UserRole::parse(&evt.value()) {
                            if role != current {
                                on_assign.call((entry.clone(), role));
                            }
                        }
                    },
                    for role in UserRole::ALL {
                        option { key: "{role}", value: "{role}", selected: role == current, "{role}" }
                    }
                }
            }
        }
    }
}
