//! Live count of signed-in members, shown on the admin overview.

use dioxus::prelude::*;

#[cfg(feature = "server")]
#[post("/api/presence/increment", session: tower_sessions::Session)]
pub async fn increment_active_users() -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("incrementActiveUsers", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[post("/api/presence/increment")]
pub async fn increment_active_users() -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Called on logout just before the session is flushed. Anonymous callers are
/// accepted so a session that already expired can still release its slot.
#[cfg(feature = "server")]
#[post("/api/presence/decrement", session: tower_sessions::Session)]
pub async fn decrement_active_users() -> Result<(), ServerFnError> {
    let caller = crate::auth::caller_or_anonymous(&session).await?;
    crate::backend::call("decrementActiveUsers", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[post("/api/presence/decrement")]
pub async fn decrement_active_users() -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/presence", session: tower_sessions::Session)]
pub async fn get_active_user_count() -> Result<u64, ServerFnError> {
    let caller = crate::auth::caller_or_anonymous(&session).await?;
    crate::backend::call("getActiveUserCount", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/presence")]
pub async fn get_active_user_count() -> Result<u64, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
