//! Error types for ding

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ding operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not inside a ding repository")]
    RepositoryNotFound,

    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("codec backend not compiled in: {0}")]
    CodecUnavailable(&'static str),

    #[error("codec {name} failed: {source}")]
    Codec {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("object store write failed for {key}: {source}")]
    ObjectStoreWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
