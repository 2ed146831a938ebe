//! # Backend actor client
//!
//! Every server function in this crate ends up here. The actor speaks a small
//! JSON RPC dialect:
//!
//! - request: `POST {backend.url}/rpc/{method}` with the positional arguments
//!   as a JSON array and the caller's principal in `x-caller-principal`;
//! - reply: `{"ok": value}` on success or `{"err": "message"}` when the actor
//!   refuses the call (not an admin, no copies left, ...).
//!
//! The HTTP client is a lazily initialised process-wide singleton.

mod error;

pub use error::BackendError;

use dioxus::prelude::ServerFnError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::models::Principal;
use crate::settings::settings;

/// Header carrying the caller's principal.
pub const CALLER_HEADER: &str = "x-caller-principal";

/// Argument list for methods that take none.
pub const NO_ARGS: [(); 0] = [];

static CLIENT: OnceCell<BackendClient> = OnceCell::const_new();

/// Envelope of every actor reply.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Reply<T> {
    Ok(T),
    Err(String),
}

impl<T> Reply<T> {
    pub fn into_result(self) -> Result<T, BackendError> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::Err(message) => Err(BackendError::Rejected(message)),
        }
    }
}

/// Decode a reply body.
pub fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<T, BackendError> {
    serde_json::from_str::<Reply<T>>(body)?.into_result()
}

pub struct BackendClient {
    http: reqwest::Client,
    base: String,
}

/// Get or initialize the backend client.
pub async fn client() -> Result<&'static BackendClient, BackendError> {
    CLIENT
        .get_or_try_init(|| async {
            let settings = settings().await?;
            let http = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(settings.backend.timeout_secs))
                .build()?;
            Ok(BackendClient::new(http, &settings.backend.url))
        })
        .await
}

impl BackendClient {
    pub fn new(http: reqwest::Client, base: &str) -> Self {
        Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn method_url(&self, method: &str) -> String {
        format!("{}/rpc/{}", self.base, method)
    }

    /// Invoke `method` on behalf of `caller`.
    pub async fn call<A, R>(&self, method: &str, caller: &Principal, args: A) -> Result<R, BackendError>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        tracing::debug!(method, caller = %caller, "backend call");
        let response = self
            .http
            .post(self.method_url(method))
            .header(CALLER_HEADER, caller.as_str())
            .json(&args)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        decode_reply(&body)
    }
}

/// Forward `method` to the actor and convert failures for the RPC boundary.
pub async fn call<A, R>(method: &str, caller: &Principal, args: A) -> Result<R, ServerFnError>
where
    A: Serialize,
    R: DeserializeOwned,
{
    let result = async { client().await?.call(method, caller, args).await }.await;
    result.map_err(|e| {
        match &e {
            BackendError::Rejected(message) => {
                tracing::warn!(method, caller = %caller, %message, "backend rejected call")
            }
            other => tracing::error!(method, error = %other, "backend call failed"),
        }
        e.into_server_fn_error()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, DashboardStats, UserRole};

    #[test]
    fn test_decode_ok() {
        let stats: DashboardStats = decode_reply(
            r#"{"ok":{"totalBooks":12,"totalUsers":4,"booksBorrowed":3,"overdueCount":1}}"#,
        )
        .unwrap();
        assert_eq!(stats.total_books, 12);
        assert_eq!(stats.overdue_count, 1);

        let role: UserRole = decode_reply(r#"{"ok":"admin"}"#).unwrap();
        assert_eq!(role, UserRole::Admin);

        let unit: () = decode_reply(r#"{"ok":null}"#).unwrap();
        assert_eq!(unit, ());

        let missing: Option<Book> = decode_reply(r#"{"ok":null}"#).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_decode_err() {
        let err = decode_reply::<()>(r#"{"err":"No copies available"}"#).unwrap_err();
        assert!(matches!(err, BackendError::Rejected(ref m) if m == "No copies available"));
        assert_eq!(err.to_string(), "No copies available");
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_reply::<u64>(r#"{"value":1}"#).unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[test]
    fn test_positional_args() {
        assert_eq!(serde_json::to_string(&NO_ARGS).unwrap(), "[]");
        assert_eq!(serde_json::to_string(&("b1",)).unwrap(), r#"["b1"]"#);
        let role = (Principal::new("aaaaa-bbbbb"), UserRole::Admin);
        assert_eq!(
            serde_json::to_string(&role).unwrap(),
            r#"["aaaaa-bbbbb","admin"]"#
        );
    }

    #[test]
    fn test_method_url() {
        let client = BackendClient::new(reqwest::Client::new(), "http://actor.test/");
        assert_eq!(client.method_url("borrowBook"), "http://actor.test/rpc/borrowBook");
    }
}
