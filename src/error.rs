//! Error types surfaced by document loading
//!
//! Traversal, table flattening and normalization are total over any block
//! sequence, so every variant here originates at the provider or file layer.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The bytes could not be turned into a block sequence.
    #[error("document is unreadable: {reason}")]
    DocumentUnreadable { reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The runtime shut down before the extraction of `path` finished.
    #[error("extraction of {} was cancelled", path.display())]
    Cancelled { path: PathBuf },
}

impl ExtractError {
    pub(crate) fn unreadable(reason: impl Into<String>) -> Self {
        ExtractError::DocumentUnreadable {
            reason: reason.into(),
        }
    }

    /// Whether the failure is about the document contents rather than the filesystem.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, ExtractError::DocumentUnreadable { .. })
    }
}
