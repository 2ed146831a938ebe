//! This crate contains all shared UI for the library portal.

use std::time::Duration;

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub mod views;

pub const LIBRARY_CSS: Asset = asset!("/assets/library.css");

pub mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LoginButton, LogoutButton};

pub mod counter;
pub use counter::AnimatedCounter;

pub mod filters;

mod footer;
pub use footer::Footer;

pub mod guard;
pub use guard::{LoadingScreen, ProtectedRoute, RequiredRole};

pub mod hooks;
pub mod mutations;

mod navbar;
pub use navbar::Navbar;

pub mod paths;

pub mod query;
pub use query::QueryProvider;

pub mod storage;

pub mod theme;
pub use theme::{ThemeProvider, ThemeToggle};

pub mod upload;
pub use upload::FileUpload;

/// Timer that works in the browser and on the server.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
