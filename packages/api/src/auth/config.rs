//! OAuth provider configuration built from [`Settings`].

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::settings::Settings;

/// OAuth provider configuration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
}

impl OAuthConfig {
    fn build(
        client_id: &str,
        client_secret: &str,
        auth_url: &str,
        token_url: &str,
        redirect_url: String,
        name: &str,
    ) -> Result<Self, String> {
        if client_id.is_empty() {
            return Err(format!("{name} OAuth client is not configured"));
        }
        Ok(Self {
            client_id: ClientId::new(client_id.to_string()),
            client_secret: ClientSecret::new(client_secret.to_string()),
            auth_url: AuthUrl::new(auth_url.to_string()).map_err(|e| e.to_string())?,
            token_url: TokenUrl::new(token_url.to_string()).map_err(|e| e.to_string())?,
            redirect_url: RedirectUrl::new(redirect_url).map_err(|e| e.to_string())?,
        })
    }

    /// GitHub OAuth config from the `github` settings section.
    pub fn github(settings: &Settings) -> Result<Self, String> {
        Self::build(
            &settings.github.client_id,
            &settings.github.client_secret,
            "https://github.com/login/oauth/authorize",
            "https://github.com/login/oauth/access_token",
            settings.callback_url("github"),
            "GitHub",
        )
    }

    /// Google OAuth config from the `google` settings section.
    pub fn google(settings: &Settings) -> Result<Self, String> {
        Self::build(
            &settings.google.client_id,
            &settings.google.client_secret,
            "https://accounts.google.com/o/oauth2/v2/auth",
            "https://oauth2.googleapis.com/token",
            settings.callback_url("google"),
            "Google",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_provider() {
        let settings = Settings::from_toml("").unwrap();
        assert!(OAuthConfig::github(&settings).is_err());
    }

    #[test]
    fn test_redirect_url() {
        let settings = Settings::from_toml(
            r#"
            [google]
            client_id = "id"
            client_secret = "secret"
            "#,
        )
        .unwrap();
        let config = OAuthConfig::google(&settings).unwrap();
        assert_eq!(
            config.redirect_url.as_str(),
            "http://localhost:8080/auth/google/callback"
        );
    }
}
