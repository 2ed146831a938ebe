//! # API crate: shared fullstack server functions for the library portal
//!
//! Domain types, form validation, and every Dioxus server function the web
//! frontend calls. Server functions resolve the caller from the browser
//! session and forward to the external backend actor; the client build only
//! gets thin HTTP stubs.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` (mostly) | GitHub/Google OAuth with PKCE, session helpers |
//! | [`backend`] | `server` | JSON RPC client for the backend actor |
//! | [`blob`] | always | Attachment references, chunking math, storage gateway client |
//! | [`models`] | always | Books, loans, reservations, members, announcements, resources |
//! | [`settings`] | `server` | Layered configuration (`config` + `dotenvy`) |
//! | [`validation`] | always | Form validation with `validator` |
//!
//! ## Server functions
//!
//! Each public `async fn` annotated with `#[get(...)]` or `#[post(...)]` is
//! compiled twice: with full server logic behind `#[cfg(feature = "server")]`
//! and as a client stub.
//!
//! - **Session**: `get_current_session`, `get_login_url`, `logout`, `initialize_access`
//! - **Accounts**: profile and role reads, `save_caller_user_profile`, `assign_user_role`, `get_all_users`
//! - **Catalog**: book CRUD and chunked attachment uploads
//! - **Loans**: `borrow_book`, `return_book`, histories, dashboard stats
//! - **Reservations**: create, cancel, approve, reject, listings
//! - **Notices / resources**: announcement and digital-resource CRUD
//! - **Presence**: active-user counter

use dioxus::prelude::*;

mod accounts;
pub mod auth;
#[cfg(feature = "server")]
pub mod backend;
pub mod blob;
mod books;
mod borrowing;
pub mod models;
mod notices;
mod presence;
mod reservations;
mod resources;
#[cfg(feature = "server")]
pub mod settings;
pub mod validation;

pub use accounts::*;
pub use blob::ExternalBlob;
pub use books::*;
pub use borrowing::*;
pub use models::*;
pub use notices::*;
pub use presence::*;
pub use reservations::*;
pub use resources::*;

/// The signed-in session, if any.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_session() -> Result<Option<SessionInfo>, ServerFnError> {
    auth::current_session(&session).await
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_session() -> Result<Option<SessionInfo>, ServerFnError> {
    Ok(None)
}

/// Start an OAuth login and return the provider's authorization URL.
#[cfg(feature = "server")]
#[get("/api/auth/login/:provider", session: tower_sessions::Session)]
pub async fn get_login_url(provider: String) -> Result<String, ServerFnError> {
    let settings = settings::settings()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (url, state, verifier) = match provider.as_str() {
        "github" => auth::GitHubOAuth::new(settings)
            .map_err(ServerFnError::new)?
            .generate_auth_url(),
        "google" => auth::GoogleOAuth::new(settings)
            .map_err(ServerFnError::new)?
            .generate_auth_url(),
        _ => return Err(ServerFnError::new(format!("Unknown provider: {}", provider))),
    };

    auth::store_pending_login(&session, &provider, state, verifier)
        .await
        .map_err(ServerFnError::new)?;
    Ok(url)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/login/:provider")]
pub async fn get_login_url(provider: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    if let Some(info) = auth::current_session(&session).await? {
        tracing::info!(principal = %info.principal, "signed out");
    }
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Register the caller with the backend's access control.
///
/// `user_token` is the `adminToken` query parameter of the page, if any; the
/// backend grants admin to the first caller presenting the configured token.
#[cfg(feature = "server")]
#[post("/api/auth/initialize", session: tower_sessions::Session)]
pub async fn initialize_access(user_token: String) -> Result<(), ServerFnError> {
    let caller = auth::require_caller(&session).await?;
    let settings = settings::settings()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    backend::call(
        "initialize",
        &caller,
        (settings.backend.admin_token.as_str(), user_token.as_str()),
    )
    .await
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/initialize")]
pub async fn initialize_access(user_token: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
