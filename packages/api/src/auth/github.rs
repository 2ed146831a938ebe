//! # GitHub OAuth 2.0
//!
//! Authorization Code flow with PKCE. Nothing is persisted here: the caller
//! keeps the CSRF state and PKCE verifier returned by
//! [`generate_auth_url`](GitHubOAuth::generate_auth_url) in the browser's
//! session and hands the verifier back to
//! [`exchange_code`](GitHubOAuth::exchange_code) on the callback.
//!
//! The account id GitHub reports becomes the identity subject; the library
//! principal is derived from it, so the same GitHub account always maps to
//! the same library member.

use oauth2::basic::BasicClient;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, Scope, TokenResponse,
};
use reqwest::Client;
use serde::Deserialize;

use super::config::OAuthConfig;
use super::session::Identity;
use crate::settings::Settings;

/// GitHub user info from API.
#[derive(Debug, Deserialize)]
struct GitHubUser {
    id: i64,
    login: String,
    email: Option<String>,
    name: Option<String>,
}

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// GitHub OAuth handler.
pub struct GitHubOAuth {
    config: OAuthConfig,
}

impl GitHubOAuth {
    pub fn new(settings: &Settings) -> Result<Self, String> {
        let config = OAuthConfig::github(settings)?;
        Ok(Self { config })
    }

    fn create_client(&self) -> ConfiguredClient {
        BasicClient::new(self.config.client_id.clone())
            .set_client_secret(self.config.client_secret.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    /// Authorization URL plus the `(state, verifier)` pair to keep until the
    /// callback.
    pub fn generate_auth_url(&self) -> (String, String, String) {
        let client = self.create_client();
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("read:user".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        (
            auth_url.to_string(),
            csrf_state.secret().clone(),
            pkce_verifier.secret().clone(),
        )
    }

    /// Exchange the authorization code and look up the GitHub account.
    pub async fn exchange_code(&self, code: &str, verifier: String) -> Result<Identity, String> {
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| e.to_string())?;

        let token_result = self
            .create_client()
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(verifier))
            .request_async(&http_client)
            .await
            .map_err(|e| format!("Token exchange failed: {}", e))?;

        let access_token = token_result.access_token().secret();

        let github_user: GitHubUser = Client::new()
            .get("https://api.github.com/user")
            .header("Authorization", format!("Bearer {}", access_token))
            .header("User-Agent", "library-portal")
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;

        Ok(Identity {
            provider: "github".to_string(),
            subject: github_user.id.to_string(),
            email: github_user.email,
            name: github_user.name.or(Some(github_user.login)),
        })
    }
}
