//! Member profiles and roles.

use dioxus::prelude::*;

#[cfg(feature = "server")]
use crate::models::Principal;
use crate::models::{UserEntry, UserProfile, UserRole};

/// The caller's own profile, `None` until the setup modal has been filled in.
#[cfg(feature = "server")]
#[get("/api/profile", session: tower_sessions::Session)]
pub async fn get_caller_user_profile() -> Result<Option<UserProfile>, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("getCallerUserProfile", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/profile")]
pub async fn get_caller_user_profile() -> Result<Option<UserProfile>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/profile", session: tower_sessions::Session)]
pub async fn save_caller_user_profile(profile: UserProfile) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("saveCallerUserProfile", &caller, (profile,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/profile")]
pub async fn save_caller_user_profile(profile: UserProfile) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/role", session: tower_sessions::Session)]
pub async fn get_caller_user_role() -> Result<UserRole, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("getCallerUserRole", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/role")]
pub async fn get_caller_user_role() -> Result<UserRole, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/role/is-admin", session: tower_sessions::Session)]
pub async fn is_caller_admin() -> Result<bool, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("isCallerAdmin", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/role/is-admin")]
pub async fn is_caller_admin() -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/users/:principal", session: tower_sessions::Session)]
pub async fn get_user_profile(principal: String) -> Result<Option<UserProfile>, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("getUserProfile", &caller, (Principal::new(principal),)).await
}

#[cfg(not(feature = "server"))]
#[get("/api/users/:principal")]
pub async fn get_user_profile(principal: String) -> Result<Option<UserProfile>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/users", session: tower_sessions::Session)]
pub async fn get_all_users() -> Result<Vec<UserEntry>, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    let rows: Vec<(Principal, UserProfile)> =
        crate::backend::call("getAllUsers", &caller, crate::backend::NO_ARGS).await?;
    Ok(rows
        .into_iter()
        .map(|(principal, profile)| UserEntry { principal, profile })
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn get_all_users() -> Result<Vec<UserEntry>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/users/role", session: tower_sessions::Session)]
pub async fn assign_user_role(principal: String, role: UserRole) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    tracing::info!(%caller, member = %principal, %role, "assigning role");
    crate::backend::call(
        "assignCallerUserRole",
        &caller,
        (Principal::new(principal), role),
    )
    .await
}

#[cfg(not(feature = "server"))]
#[post("/api/users/role")]
pub async fn assign_user_role(principal: String, role: UserRole) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
