//! Server settings.
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `library.toml` next to the binary, then environment variables using `__`
//! between section and key (`BACKEND__URL`, `GITHUB__CLIENT_ID`, ...). A `.env`
//! file is loaded into the environment first.

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::Deserialize;
use tokio::sync::OnceCell;

static SETTINGS: OnceCell<Settings> = OnceCell::const_new();

#[derive(Debug, Clone, Deserialize)]
pub struct Backend {
    pub url: String,
    /// Secret the backend checks before granting the first admin.
    pub admin_token: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    pub gateway_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Auth {
    /// Public origin the OAuth providers redirect back to.
    pub redirect_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OAuthClient {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub expiry_days: i64,
    pub secure: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub backend: Backend,
    pub storage: Storage,
    pub auth: Auth,
    pub github: OAuthClient,
    pub google: OAuthClient,
    pub session: Session,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("backend.url", "http://127.0.0.1:4943")?
        .set_default("backend.admin_token", "")?
        .set_default("backend.timeout_secs", 30)?
        .set_default("storage.gateway_url", "http://127.0.0.1:4944")?
        .set_default("auth.redirect_base", "http://localhost:8080")?
        .set_default("github.client_id", "")?
        .set_default("github.client_secret", "")?
        .set_default("google.client_id", "")?
        .set_default("google.client_secret", "")?
        .set_default("session.expiry_days", 7)?
        .set_default("session.secure", false)
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        defaults()?
            .add_source(
                File::with_name("library.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Defaults overlaid with an inline TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Callback URL registered with `provider`.
    pub fn callback_url(&self, provider: &str) -> String {
        format!(
            "{}/auth/{}/callback",
            self.auth.redirect_base.trim_end_matches('/'),
            provider
        )
    }
}

/// Get or load the process-wide settings.
pub async fn settings() -> Result<&'static Settings, ConfigError> {
    SETTINGS
        .get_or_try_init(|| async {
            let settings = Settings::new()?;
            tracing::info!(backend = %settings.backend.url, "settings loaded");
            Ok(settings)
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.backend.url, "http://127.0.0.1:4943");
        assert_eq!(settings.backend.timeout_secs, 30);
        assert_eq!(settings.session.expiry_days, 7);
        assert!(!settings.session.secure);
        assert_eq!(
            settings.callback_url("github"),
            "http://localhost:8080/auth/github/callback"
        );
    }

    #[test]
    fn test_toml_overrides() {
        let settings = Settings::from_toml(
            r#"
            [backend]
            url = "https://actor.vemu.ac.in"
            [auth]
            redirect_base = "https://library.vemu.ac.in/"
            [session]
            secure = true
            "#,
        )
        .unwrap();
        assert_eq!(settings.backend.url, "https://actor.vemu.ac.in");
        assert_eq!(settings.backend.admin_token, "");
        assert!(settings.session.secure);
        assert_eq!(
            settings.callback_url("google"),
            "https://library.vemu.ac.in/auth/google/callback"
        );
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("STORAGE__GATEWAY_URL", "https://blobs.test");
        std::env::set_var("GITHUB__CLIENT_ID", "gh-test-id");
        let settings = Settings::new().unwrap();
        assert_eq!(settings.storage.gateway_url, "https://blobs.test");
        assert_eq!(settings.github.client_id, "gh-test-id");
    }
}
