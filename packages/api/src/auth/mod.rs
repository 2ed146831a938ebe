//! Authentication: OAuth providers and the browser session.

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod github;
#[cfg(feature = "server")]
mod google;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use config::OAuthConfig;
#[cfg(feature = "server")]
pub use github::GitHubOAuth;
#[cfg(feature = "server")]
pub use google::GoogleOAuth;
#[cfg(feature = "server")]
pub use session::{
    caller_or_anonymous, current_session, require_caller, sign_in, store_pending_login,
    take_pending_login, Identity, SESSION_INFO_KEY,
};

/// Identity providers offered on the login page.
pub const PROVIDERS: [&str; 2] = ["github", "google"];

#[cfg(feature = "server")]
pub async fn exchange_code(
    settings: &crate::settings::Settings,
    provider: &str,
    code: &str,
    verifier: String,
) -> Result<Identity, String> {
    match provider {
        "github" => GitHubOAuth::new(settings)?.exchange_code(code, verifier).await,
        "google" => GoogleOAuth::new(settings)?.exchange_code(code, verifier).await,
        other => Err(format!("Unknown provider: {}", other)),
    }
}
