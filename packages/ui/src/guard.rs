//! Route guard.
//!
//! [`decide`] is the whole policy; [`ProtectedRoute`] renders its outcome.

use api::UserRole;
use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::paths;

/// Who a guarded route is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredRole {
    Admin,
    /// Members (and guests still setting up their profile), never admins.
    Member,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Redirect(&'static str),
    Render,
}

pub fn decide(state: &AuthState, required: Option<RequiredRole>) -> GuardDecision {
    let signed_in = state.session.is_some();
    if state.loading || (signed_in && state.role_loading) {
        return GuardDecision::Loading;
    }
    if !signed_in {
        return GuardDecision::Redirect(paths::LOGIN);
    }
    match (required, state.role) {
        (Some(RequiredRole::Admin), role) if role != Some(UserRole::Admin) => {
            GuardDecision::Redirect(paths::DASHBOARD)
        }
        (Some(RequiredRole::Member), Some(UserRole::Admin)) => GuardDecision::Redirect(paths::ADMIN),
        _ => GuardDecision::Render,
    }
}

#[component]
pub fn LoadingScreen(#[props(default = "Loading session…".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "loading-screen",
            div { class: "spinner" }
            p { class: "muted", "{message}" }
        }
    }
}

/// Renders `children` only when the guard allows it.
#[component]
pub fn ProtectedRoute(required: Option<RequiredRole>, children: Element) -> Element {
    let auth = use_auth();
    let decision = decide(&auth(), required);

    use_effect(move || {
        if let GuardDecision::Redirect(to) = decide(&auth(), required) {
            tracing::debug!(to, "guard redirect");
            navigator().replace(to);
        }
    });

    match decision {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Loading | GuardDecision::Redirect(_) => rsx! { LoadingScreen {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Principal, SessionInfo};

    fn signed_in(role: Option<UserRole>) -> AuthState {
        AuthState {
            session: Some(SessionInfo {
                principal: Principal::new("aaaaa-bbbbb"),
                provider: "github".to_string(),
                display_name: None,
            }),
            loading: false,
            role,
            role_loading: false,
        }
    }

    #[test]
    fn test_loading() {
        assert_eq!(decide(&AuthState::default(), None), GuardDecision::Loading);
        let mut state = signed_in(None);
        state.role_loading = true;
        assert_eq!(decide(&state, Some(RequiredRole::Member)), GuardDecision::Loading);
    }

    #[test]
    fn test_unauthenticated_goes_to_login() {
        let state = AuthState {
            loading: false,
            role_loading: false,
            ..AuthState::default()
        };
        assert_eq!(decide(&state, None), GuardDecision::Redirect("/login"));
        assert_eq!(
            decide(&state, Some(RequiredRole::Admin)),
            GuardDecision::Redirect("/login")
        );
    }

    #[test]
    fn test_role_gates() {
        let member = signed_in(Some(UserRole::User));
        assert_eq!(
            decide(&member, Some(RequiredRole::Admin)),
            GuardDecision::Redirect("/dashboard")
        );
        assert_eq!(decide(&member, Some(RequiredRole::Member)), GuardDecision::Render);

        let admin = signed_in(Some(UserRole::Admin));
        assert_eq!(decide(&admin, Some(RequiredRole::Admin)), GuardDecision::Render);
        assert_eq!(
            decide(&admin, Some(RequiredRole::Member)),
            GuardDecision::Redirect("/admin")
        );

        let guest = signed_in(Some(UserRole::Guest));
        assert_eq!(decide(&guest, Some(RequiredRole::Member)), GuardDecision::Render);
        assert_eq!(
            decide(&signed_in(None), Some(RequiredRole::Admin)),
            GuardDecision::Redirect("/dashboard")
        );
    }
}
