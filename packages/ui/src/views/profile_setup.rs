use api::validation::{FieldErrors, ProfileForm};
use api::Time;
use dioxus::prelude::*;

use crate::components::{use_toast, Dialog, Field, Input};
use crate::mutations::{run_mutation, MutationKind};
use crate::query::use_query_client;

use super::report;

/// First-login form. Stays open until a profile is saved.
#[component]
pub fn ProfileSetupModal() -> Element {
    let mut form = use_signal(ProfileForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut saving = use_signal(|| false);
    let mut client = use_query_client();
    let toast = use_toast();

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let profile = match form.read().validate_input(Time::now()) {
            Ok(profile) => profile,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        saving.set(true);
        let result = run_mutation(
            &mut client,
            MutationKind::SaveProfile,
            api::save_caller_user_profile(profile),
        )
        .await;
        saving.set(false);
        report(toast, Some(result), |_| "Profile saved".to_string());
    };

    let error = move |field: &str| errors.read().get(field).map(str::to_string);

    rsx! {
        Dialog {
            title: "Welcome to VEMU Library",
            description: "Set up your profile to get started".to_string(),
            on_close: move |_| {},
            form {
                class: "form",
                onsubmit: submit,
                Field {
                    label: "Full Name",
                    html_for: "profile-name",
                    error: error("name"),
                    Input {
                        id: "profile-name",
                        placeholder: "Enter your full name",
                        value: form.read().name.clone(),
                        invalid: error("name").is_some(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }
                Field {
                    label: "Email Address",
                    html_for: "profile-email",
                    error: error("email"),
                    Input {
                        id: "profile-email",
                        r#type: "email",
                        placeholder: "your.email@vemu.ac.in",
                        value: form.read().email.clone(),
                        invalid: error("email").is_some(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Profile" }
                    }
                }
            }
        }
    }
}
