//! Sign-in and sign-up pages. Both hand off to an OAuth provider.

use dioxus::prelude::*;

use crate::auth::{use_auth, LoginButton};
use crate::components::Card;
use crate::{paths, storage};

/// Send a signed-in visitor to their home once the role is known.
fn use_redirect_when_signed_in() {
    let auth = use_auth();
    use_effect(move || {
        let state = auth.read();
        if state.session.is_some() && !state.role_loading {
            navigator().replace(paths::home_for(state.role));
        }
    });
}

fn callback_error_message(code: &str) -> &'static str {
    match code {
        "missing_code" | "missing_state" => "The sign-in response was incomplete. Please try again.",
        "oauth_error" => "The identity provider rejected the sign-in.",
        "config_error" => "This sign-in method is not configured.",
        "session_error" => "Could not start a session. Please try again.",
        _ => "Sign-in failed. Please try again.",
    }
}

#[component]
fn ProviderButtons(github_label: String, google_label: String) -> Element {
    rsx! {
        div {
            class: "provider-buttons",
            LoginButton { provider: "github", label: github_label, class: "btn provider-btn github-btn" }
            LoginButton { provider: "google", label: google_label, class: "btn provider-btn google-btn" }
        }
    }
}

#[component]
pub fn Login() -> Element {
    use_redirect_when_signed_in();
    let error = use_hook(|| storage::query_param("error"));

    rsx! {
        div {
            class: "auth-page",
            Card {
                p { class: "brand-org", "VEMU Library" }
                p { class: "muted", "Digital Library System" }
                h1 { "Welcome Back" }
                p { class: "muted", "Choose your preferred sign-in method:" }
                if let Some(code) = error {
                    p { class: "field-error", "{callback_error_message(&code)}" }
                }
                ProviderButtons {
                    github_label: "Continue with GitHub",
                    google_label: "Continue with Google",
                }
                p {
                    class: "muted",
                    crate::Icon { icon: crate::icons::FaLock, width: 12, height: 12 }
                    " Secure Authentication"
                }
                p {
                    class: "muted",
                    "New here? "
                    Link { to: paths::SIGNUP, "Create an account" }
                }
            }
        }
    }
}

#[component]
pub fn SignUp() -> Element {
    use_redirect_when_signed_in();

    rsx! {
        div {
            class: "auth-page",
            Card {
                h1 { "Join VEMU Library" }
                p { class: "muted", "Create your account to access the library" }
                ol {
                    class: "steps",
                    li { "Sign in with your GitHub or Google account." }
                    li { "Fill in your name and email on first visit." }
                    li { "Browse the catalog and borrow books." }
                }
                ProviderButtons {
                    github_label: "Sign up with GitHub",
                    google_label: "Sign up with Google",
                }
                p {
                    class: "muted",
                    "Already registered? "
                    Link { to: paths::LOGIN, "Login" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_error_messages() {
        assert_eq!(callback_error_message("config_error"), "This sign-in method is not configured.");
        assert_eq!(callback_error_message("weird"), "Sign-in failed. Please try again.");
    }
}
