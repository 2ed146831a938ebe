//! Chunked attachment uploads with progress.

use api::blob::{chunk_ranges, progress_percent};
use api::ExternalBlob;
use dioxus::prelude::*;

/// Where chunks go. The app sends them through the upload server functions.
pub trait UploadSink {
    async fn begin(&mut self, file_name: &str, size: u64) -> Result<String, String>;
    async fn chunk(&mut self, id: &str, offset: u64, bytes: Vec<u8>) -> Result<(), String>;
    async fn finish(&mut self, id: &str) -> Result<ExternalBlob, String>;
}

pub struct ServerUpload;

impl UploadSink for ServerUpload {
    async fn begin(&mut self, file_name: &str, size: u64) -> Result<String, String> {
        api::begin_upload(file_name.to_string(), size)
            .await
            .map_err(|e| e.to_string())
    }

    async fn chunk(&mut self, id: &str, offset: u64, bytes: Vec<u8>) -> Result<(), String> {
        api::upload_chunk(id.to_string(), offset, bytes)
            .await
            .map_err(|e| e.to_string())
    }

    async fn finish(&mut self, id: &str) -> Result<ExternalBlob, String> {
        api::finish_upload(id.to_string())
            .await
            .map_err(|e| e.to_string())
    }
}

/// Send `bytes` in chunks, reporting the percentage after each one.
pub async fn upload_bytes(
    sink: &mut impl UploadSink,
    file_name: &str,
    bytes: &[u8],
    mut on_progress: impl FnMut(u8),
) -> Result<ExternalBlob, String> {
    let id = sink.begin(file_name, bytes.len() as u64).await?;
    tracing::debug!(%id, file_name, size = bytes.len(), "upload started");
    on_progress(progress_percent(0, bytes.len()));
    for range in chunk_ranges(bytes.len()) {
        let end = range.end;
        sink.chunk(&id, range.start as u64, bytes[range].to_vec()).await?;
        on_progress(progress_percent(end, bytes.len()));
    }
    if bytes.is_empty() {
        on_progress(100);
    }
    sink.finish(&id).await
}

/// File picker that uploads the chosen file and reports the resulting blob.
#[component]
pub fn FileUpload(
    current: Option<ExternalBlob>,
    on_uploaded: EventHandler<Option<ExternalBlob>>,
) -> Element {
    let mut progress = use_signal(|| Option::<u8>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let onchange = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        error.set(None);
        progress.set(Some(0));
        let name = file.name();
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Failed to read {}: {}", name, e);
                error.set(Some("Could not read the selected file".to_string()));
                progress.set(None);
                return;
            }
        };
        match upload_bytes(&mut ServerUpload, &name, &bytes, |p| progress.set(Some(p))).await {
            Ok(blob) => on_uploaded.call(Some(blob)),
            Err(e) => {
                tracing::error!("Upload of {} failed: {}", name, e);
                error.set(Some(crate::mutations::clean_error(&e)));
            }
        }
        progress.set(None);
    };

    rsx! {
        div {
            class: "upload",
            if let Some(blob) = current {
                div {
                    class: "upload-current",
                    crate::Icon { icon: crate::icons::FaPaperclip, width: 12, height: 12 }
                    span { "{blob.file_name()}" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        r#type: "button",
                        onclick: move |_| on_uploaded.call(None),
                        "Remove"
                    }
                }
            }
            input {
                r#type: "file",
                class: "input",
                disabled: progress().is_some(),
                onchange,
            }
            if let Some(percent) = progress() {
                div {
                    class: "progress",
                    div { class: "progress-bar", style: "width: {percent}%" }
                }
                span { class: "muted", "Uploading... {percent}%" }
            }
            if let Some(message) = error() {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        offsets: Vec<(u64, usize)>,
        fail_at: Option<u64>,
        finished: bool,
    }

    impl UploadSink for Recorder {
        async fn begin(&mut self, _file_name: &str, _size: u64) -> Result<String, String> {
            Ok("up-1".to_string())
        }

        async fn chunk(&mut self, _id: &str, offset: u64, bytes: Vec<u8>) -> Result<(), String> {
            if self.fail_at == Some(offset) {
                return Err("gateway unavailable".to_string());
            }
            self.offsets.push((offset, bytes.len()));
            Ok(())
        }

        async fn finish(&mut self, id: &str) -> Result<ExternalBlob, String> {
            self.finished = true;
            Ok(ExternalBlob {
                url: format!("https://files.example/{id}/scan.pdf"),
            })
        }
    }

    #[tokio::test]
    async fn test_upload_sends_chunks_in_order() {
        let size = api::blob::CHUNK_SIZE * 2 + 10;
        let data = vec![7u8; size];
        let mut sink = Recorder::default();
        let mut seen = Vec::new();
        let blob = upload_bytes(&mut sink, "scan.pdf", &data, |p| seen.push(p))
            .await
            .unwrap();

        let chunk = api::blob::CHUNK_SIZE;
        assert_eq!(
            sink.offsets,
            vec![(0, chunk), (chunk as u64, chunk), (2 * chunk as u64, 10)]
        );
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(blob.file_name(), "scan.pdf");
    }

    #[tokio::test]
    async fn test_empty_file_completes() {
        let mut sink = Recorder::default();
        let mut seen = Vec::new();
        upload_bytes(&mut sink, "empty.txt", &[], |p| seen.push(p))
            .await
            .unwrap();
        assert!(sink.offsets.is_empty());
        assert!(sink.finished);
        assert_eq!(seen.last(), Some(&100));
    }

    #[tokio::test]
    async fn test_failed_chunk_aborts() {
        let data = vec![1u8; api::blob::CHUNK_SIZE + 1];
        let mut sink = Recorder {
            fail_at: Some(api::blob::CHUNK_SIZE as u64),
            ..Default::default()
        };
        let out = upload_bytes(&mut sink, "a.bin", &data, |_| {}).await;
        assert_eq!(out, Err("gateway unavailable".to_string()));
        assert!(!sink.finished);
    }
}
