//! Externally hosted file attachments.
//!
//! Books may point at a blob kept by the storage gateway. Uploads go through
//! the web server in fixed-size chunks so the browser can report progress.

use serde::{Deserialize, Serialize};

/// Upload chunk size in bytes.
pub const CHUNK_SIZE: usize = 256 * 1024;

/// Reference to a file hosted by the storage gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalBlob {
    pub url: String,
}

impl ExternalBlob {
    pub fn file_name(&self) -> &str {
        self.url
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("attachment")
    }
}

/// Byte ranges of the chunks a file of `len` bytes is sent in.
pub fn chunk_ranges(len: usize) -> impl Iterator<Item = std::ops::Range<usize>> {
    (0..len)
        .step_by(CHUNK_SIZE)
        .map(move |start| start..(start + CHUNK_SIZE).min(len))
}

/// Integer percentage of `sent` out of `total`. Empty files are complete.
pub fn progress_percent(sent: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((sent.min(total) as u128 * 100) / total as u128) as u8
}

#[cfg(feature = "server")]
pub use gateway::{gateway, StorageGateway};

#[cfg(feature = "server")]
mod gateway {
    use serde::Deserialize;
    use tokio::sync::OnceCell;

    use super::ExternalBlob;
    use crate::backend::BackendError;
    use crate::settings::settings;

    static GATEWAY: OnceCell<StorageGateway> = OnceCell::const_new();

    #[derive(Deserialize)]
    struct UploadStarted {
        id: String,
    }

    /// HTTP client for the storage gateway's resumable upload API.
    pub struct StorageGateway {
        http: reqwest::Client,
        base: String,
    }

    /// Get or initialize the process-wide gateway client.
    pub async fn gateway() -> Result<&'static StorageGateway, BackendError> {
        GATEWAY
            .get_or_try_init(|| async {
                let settings = settings().await?;
                let http = reqwest::Client::builder()
                    .timeout(std::time::Duration::from_secs(settings.backend.timeout_secs))
                    .build()?;
                Ok(StorageGateway {
                    http,
                    base: settings.storage.gateway_url.trim_end_matches('/').to_string(),
                })
            })
            .await
    }

    impl StorageGateway {
        async fn checked(
            response: reqwest::Response,
        ) -> Result<reqwest::Response, BackendError> {
            let status = response.status();
            if status.is_success() {
                Ok(response)
            } else {
                let body = response.text().await.unwrap_or_default();
                Err(BackendError::Status { status: status.as_u16(), body })
            }
        }

        pub async fn begin(&self, file_name: &str, size: u64) -> Result<String, BackendError> {
            let response = self
                .http
                .post(format!("{}/uploads", self.base))
                .json(&serde_json::json!({ "fileName": file_name, "size": size }))
                .send()
                .await?;
            let started: UploadStarted = Self::checked(response).await?.json().await?;
            tracing::debug!(upload = %started.id, file_name, size, "upload started");
            Ok(started.id)
        }

        pub async fn chunk(&self, id: &str, offset: u64, bytes: Vec<u8>) -> Result<(), BackendError> {
            let response = self
                .http
                .put(format!("{}/uploads/{}", self.base, id))
                .query(&[("offset", offset)])
                .body(bytes)
                .send()
                .await?;
            Self::checked(response).await?;
            Ok(())
        }

        pub async fn finish(&self, id: &str) -> Result<ExternalBlob, BackendError> {
            let response = self
                .http
                .post(format!("{}/uploads/{}/complete", self.base, id))
                .send()
                .await?;
            let blob: ExternalBlob = Self::checked(response).await?.json().await?;
            tracing::info!(upload = %id, url = %blob.url, "upload complete");
            Ok(blob)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_ranges() {
        assert_eq!(chunk_ranges(0).count(), 0);
        let ranges: Vec<_> = chunk_ranges(CHUNK_SIZE * 2 + 10).collect();
        assert_eq!(
            ranges,
            vec![0..CHUNK_SIZE, CHUNK_SIZE..CHUNK_SIZE * 2, CHUNK_SIZE * 2..CHUNK_SIZE * 2 + 10]
        );
        assert_eq!(chunk_ranges(CHUNK_SIZE).collect::<Vec<_>>(), vec![0..CHUNK_SIZE]);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 0), 100);
        assert_eq!(progress_percent(0, 400), 0);
        assert_eq!(progress_percent(100, 400), 25);
        assert_eq!(progress_percent(399, 400), 99);
        assert_eq!(progress_percent(500, 400), 100);
    }

    #[test]
    fn test_file_name() {
        let blob = ExternalBlob { url: "https://files.example/b/syllabus.pdf".to_string() };
        assert_eq!(blob.file_name(), "syllabus.pdf");
        let bare = ExternalBlob { url: "https://files.example/".to_string() };
        assert_eq!(bare.file_name(), "attachment");
    }
}
