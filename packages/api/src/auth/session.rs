//! Browser session helpers.
//!
//! The signed-in identity lives in the `tower-sessions` session as a
//! [`SessionInfo`]. Between the OAuth redirect and its callback the session
//! also carries the CSRF state, PKCE verifier, and provider name.

use dioxus::prelude::ServerFnError;
use tower_sessions::Session;

use crate::models::{Principal, SessionInfo};

/// Key for the signed-in [`SessionInfo`].
pub const SESSION_INFO_KEY: &str = "session_info";
pub const OAUTH_STATE_KEY: &str = "oauth_state";
pub const OAUTH_VERIFIER_KEY: &str = "oauth_verifier";
pub const OAUTH_PROVIDER_KEY: &str = "oauth_provider";

/// What an identity provider told us about the account that signed in.
#[derive(Debug, Clone)]
pub struct Identity {
    pub provider: String,
    pub subject: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Identity {
    pub fn into_session_info(self) -> SessionInfo {
        SessionInfo {
            principal: Principal::derive(&self.provider, &self.subject),
            provider: self.provider,
            display_name: self.name.or(self.email),
        }
    }
}

fn session_error(e: tower_sessions::session::Error) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

pub async fn current_session(session: &Session) -> Result<Option<SessionInfo>, ServerFnError> {
    session
        .get::<SessionInfo>(SESSION_INFO_KEY)
        .await
        .map_err(session_error)
}

/// Principal of the signed-in caller, or "Not authenticated".
pub async fn require_caller(session: &Session) -> Result<Principal, ServerFnError> {
    current_session(session)
        .await?
        .map(|info| info.principal)
        .ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// Principal of the caller, or the anonymous principal for public reads.
pub async fn caller_or_anonymous(session: &Session) -> Result<Principal, ServerFnError> {
    Ok(current_session(session)
        .await?
        .map(|info| info.principal)
        .unwrap_or_else(Principal::anonymous))
}

/// Remember the state of an OAuth redirect until its callback.
pub async fn store_pending_login(
    session: &Session,
    provider: &str,
    state: String,
    verifier: String,
) -> Result<(), String> {
    session
        .insert(OAUTH_PROVIDER_KEY, provider)
        .await
        .map_err(|e| e.to_string())?;
    session
        .insert(OAUTH_STATE_KEY, state)
        .await
        .map_err(|e| e.to_string())?;
    session
        .insert(OAUTH_VERIFIER_KEY, verifier)
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Consume the pending login for `provider` and return its PKCE verifier.
///
/// Fails when no login is pending, the provider differs, or `state` does not
/// match the one issued with the redirect.
pub async fn take_pending_login(
    session: &Session,
    provider: &str,
    state: &str,
) -> Result<String, String> {
    let stored_provider: Option<String> = session
        .remove(OAUTH_PROVIDER_KEY)
        .await
        .map_err(|e| e.to_string())?;
    let stored_state: Option<String> = session
        .remove(OAUTH_STATE_KEY)
        .await
        .map_err(|e| e.to_string())?;
    let verifier: Option<String> = session
        .remove(OAUTH_VERIFIER_KEY)
        .await
        .map_err(|e| e.to_string())?;

    match (stored_provider, stored_state, verifier) {
        (Some(p), Some(s), Some(v)) if p == provider && s == state => Ok(v),
        (None, _, _) | (_, None, _) | (_, _, None) => Err("No login in progress".to_string()),
        _ => Err("Invalid OAuth state".to_string()),
    }
}

/// Sign the browser in as `identity`, rotating the session id.
pub async fn sign_in(session: &Session, identity: Identity) -> Result<SessionInfo, String> {
    let info = identity.into_session_info();
    session.cycle_id().await.map_err(|e| e.to_string())?;
    session
        .insert(SESSION_INFO_KEY, &info)
        .await
        .map_err(|e| e.to_string())?;
    tracing::info!(principal = %info.principal, provider = %info.provider, "signed in");
    Ok(info)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_anonymous_until_signed_in() {
        let session = session();
        assert!(require_caller(&session).await.is_err());
        assert!(caller_or_anonymous(&session).await.unwrap().is_anonymous());

        let info = sign_in(
            &session,
            Identity {
                provider: "github".to_string(),
                subject: "12345".to_string(),
                email: None,
                name: Some("octocat".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(info.display_name.as_deref(), Some("octocat"));
        assert_eq!(require_caller(&session).await.unwrap(), info.principal);
    }

    #[tokio::test]
    async fn test_pending_login_checks_state() {
        let session = session();
        store_pending_login(&session, "google", "s1".to_string(), "v1".to_string())
            .await
            .unwrap();
        assert_eq!(
            take_pending_login(&session, "google", "wrong").await,
            Err("Invalid OAuth state".to_string())
        );
        // A failed attempt consumes the pending login.
        assert_eq!(
            take_pending_login(&session, "google", "s1").await,
            Err("No login in progress".to_string())
        );

        store_pending_login(&session, "google", "s2".to_string(), "v2".to_string())
            .await
            .unwrap();
        assert_eq!(take_pending_login(&session, "google", "s2").await, Ok("v2".to_string()));
    }
}
