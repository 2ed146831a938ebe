//! Authentication context and hooks for the UI.

use api::{Principal, SessionInfo, UserRole};
use dioxus::prelude::*;

use crate::mutations::{run_mutation, MutationKind};
use crate::query::{use_query_client, Invalidate, QueryKey};
use crate::{paths, storage};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<SessionInfo>,
    /// The session lookup has not finished yet.
    pub loading: bool,
    pub role: Option<UserRole>,
    /// A role lookup for the current session is in flight.
    pub role_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
            role: None,
            role_loading: true,
        }
    }
}

impl AuthState {
    pub fn principal(&self) -> Option<Principal> {
        self.session.as_ref().map(|s| s.principal.clone())
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(UserRole::Admin)
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
///
/// Looks up the session on mount. Once a principal is known it registers the
/// caller with the backend (forwarding an `adminToken` query parameter),
/// bumps the active-user counter the first time this browser sees that
/// principal, and resolves the caller's role. The role is
/// refetched whenever the `CallerRole` query is invalidated.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    let mut access_ready = use_signal(|| false);
    let mut client = use_query_client();

    let _ = use_resource(move || async move {
        match api::get_current_session().await {
            Ok(session) => {
                let role = session
                    .as_ref()
                    .and_then(|s| storage::load_role_for(&s.principal));
                let signed_in = session.is_some();
                auth_state.set(AuthState {
                    session,
                    loading: false,
                    role,
                    role_loading: signed_in,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to load session: {}", e);
                auth_state.set(AuthState {
                    session: None,
                    loading: false,
                    role: None,
                    role_loading: false,
                });
            }
        }
    });

    let principal = use_memo(move || auth_state.read().principal());

    // Once per principal: register with the backend, and count the user as
    // active unless this browser already did.
    let _ = use_resource(move || {
        let principal = principal();
        async move {
            access_ready.set(false);
            let Some(principal) = principal else {
                return;
            };
            let token = storage::query_param("adminToken").unwrap_or_default();
            if let Err(e) = api::initialize_access(token).await {
                tracing::warn!(%principal, "Access initialization failed: {}", e);
            }
            if !storage::is_counted_active(&principal) {
                match run_mutation(
                    &mut client,
                    MutationKind::IncrementActiveUsers,
                    api::increment_active_users(),
                )
                .await
                {
                    Ok(()) => storage::mark_counted_active(&principal),
                    Err(e) => tracing::warn!("Failed to register active user: {}", e),
                }
            }
            access_ready.set(true);
        }
    });

    let _ = use_resource(move || {
        let principal = principal();
        let ready = access_ready();
        let _version = client.version(QueryKey::CallerRole);
        async move {
            let Some(principal) = principal else {
                return;
            };
            if !ready {
                return;
            }
            auth_state.write().role_loading = true;
            match api::get_caller_user_role().await {
                Ok(role) => {
                    storage::save_role(&principal, role);
                    let mut state = auth_state.write();
                    state.role = Some(role);
                    state.role_loading = false;
                }
                Err(e) => {
                    tracing::warn!("Role lookup failed, keeping persisted role: {}", e);
                    auth_state.write().role_loading = false;
                }
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to initiate login with a specific provider.
#[component]
pub fn LoginButton(
    provider: String,
    #[props(default = "Login".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let provider_clone = provider.clone();
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let onclick = move |_| {
        let provider = provider_clone.clone();
        async move {
            loading.set(true);
            error.set(None);
            match api::get_login_url(provider).await {
                Ok(url) => {
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&url);
                        }
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    tracing::info!("Login URL: {}", url);
                }
                Err(e) => {
                    tracing::error!("Failed to get login URL: {}", e);
                    error.set(Some("Sign-in is unavailable right now.".to_string()));
                    loading.set(false);
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if provider == "github" {
                crate::Icon { icon: crate::brand_icons::FaGithub, width: 16, height: 16 }
            } else {
                crate::Icon { icon: crate::brand_icons::FaGoogle, width: 16, height: 16 }
            }
            if loading() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
        if let Some(message) = error() {
            p { class: "field-error", "{message}" }
        }
    }
}

/// Sign out: release the active-user slot this browser holds while the
/// session still names the caller, end the session, forget the persisted role
/// and cached queries, then go home.
pub async fn sign_out(mut auth_state: Signal<AuthState>, mut client: crate::query::QueryClient) {
    let counted = auth_state
        .peek()
        .principal()
        .is_some_and(|p| storage::is_counted_active(&p));
    if counted {
        if let Err(e) = api::decrement_active_users().await {
            tracing::warn!("Failed to release active user: {}", e);
        }
    }
    if let Err(e) = api::logout().await {
        tracing::error!("Logout failed: {}", e);
    }
    storage::clear_counted_active();
    storage::clear_role();
    client.clear();
    client.invalidate(MutationKind::DecrementActiveUsers.invalidates());
    auth_state.set(AuthState {
        session: None,
        loading: false,
        role: None,
        role_loading: false,
    });
    navigator().push(paths::HOME);
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth_state = use_auth();
    let client = use_query_client();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| sign_out(auth_state, client),
            crate::Icon { icon: crate::icons::FaRightFromBracket, width: 14, height: 14 }
            "{label}"
        }
    }
}
