//! Route paths shared by links, redirects, and the router.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const DASHBOARD: &str = "/dashboard";
pub const PROFILE: &str = "/profile";
pub const RESOURCES: &str = "/resources";
pub const ADMIN: &str = "/admin";

/// Where a signed-in user lands after login.
pub fn home_for(role: Option<api::UserRole>) -> &'static str {
    match role {
        Some(api::UserRole::Admin) => ADMIN,
        _ => DASHBOARD,
    }
}
