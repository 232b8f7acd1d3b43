//! Illustration file capture
//!
//! Each selected file is read on its own task and embedded as a `data:` URL so
//! the profile stays a single JSON document. Results come back in selection
//! order no matter which read finishes first, and a failed read only rejects
//! its own file.

use crate::error::AttachmentError;
use crate::state::Attachment;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Source of file bytes, abstracted so tests can control timing and failures
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

#[async_trait]
impl FileReader for FsReader {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

/// Split a `;`-separated list of paths as typed into the attachment field
pub fn parse_selection(input: &str) -> Vec<PathBuf> {
    input
        .split(';')
        .map(|part| part.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|part| !part.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// MIME type inferred from the file extension
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Embed bytes as a base64 `data:` URL
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

async fn capture_one(reader: &dyn FileReader, path: PathBuf) -> Result<Attachment, AttachmentError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AttachmentError::MissingFileName { path: path.clone() })?;
    let bytes = reader
        .read(&path)
        .await
        .map_err(|source| AttachmentError::Read {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(file = %name, bytes = bytes.len(), "captured attachment");
    Ok(Attachment {
        data: to_data_url(mime_type_for(&path), &bytes),
        name,
    })
}

/// Read every path concurrently; the result vector is in selection order
pub async fn capture_files(
    reader: Arc<dyn FileReader>,
    paths: Vec<PathBuf>,
) -> Vec<Result<Attachment, AttachmentError>> {
    let mut tasks = JoinSet::new();
    for (index, path) in paths.iter().cloned().enumerate() {
        let reader = Arc::clone(&reader);
        tasks.spawn(async move { (index, capture_one(reader.as_ref(), path).await) });
    }

    let mut slots: Vec<Option<Result<Attachment, AttachmentError>>> =
        paths.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(err) => tracing::warn!("attachment read task failed: {err}"),
        }
    }

    slots
        .into_iter()
        .zip(paths)
        .map(|(slot, path)| {
            slot.unwrap_or_else(|| {
                Err(AttachmentError::Task {
                    path,
                    message: "task did not complete".to_string(),
                })
            })
        })
        .collect()
}

/// Successful captures in order, and the errors of the rest
pub fn partition_results(
    results: Vec<Result<Attachment, AttachmentError>>,
) -> (Vec<Attachment>, Vec<AttachmentError>) {
    let mut attached = Vec::new();
    let mut failed = Vec::new();
    for result in results {
        match result {
            Ok(attachment) => attached.push(attachment),
            Err(err) => failed.push(err),
        }
    }
    (attached, failed)
}
