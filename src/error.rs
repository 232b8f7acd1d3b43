//! Error types for storage, attachment capture and export

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the persisted profile
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("no storage location available")]
    Unavailable,
}

/// Failure capturing a single attachment; other files in the batch are unaffected
#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} has no file name", path.display())]
    MissingFileName { path: PathBuf },
    #[error("read task for {} failed: {message}", path.display())]
    Task { path: PathBuf, message: String },
}

/// Failure writing an exported document
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
