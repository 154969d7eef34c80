//! Error types for content loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors that stop content from loading at all
///
/// Problems with a single document are reported as
/// [`LoadIssue`](crate::LoadIssue) values instead.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The content root is missing or not a directory
    #[error("Content root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// I/O error while inspecting the root
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document loading task panicked or was cancelled
    #[error("Document load task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
