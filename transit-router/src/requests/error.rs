//! Errors raised while processing an input document.

use crate::catalogue::CatalogueError;
use crate::router::RouterError;

/// Fatal errors for a whole run.
///
/// Per-query "not found" conditions never surface here; they become
/// `error_message` responses.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not a valid request document, or output failed to serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The network could not be loaded
    #[error("failed to load network: {0}")]
    Catalogue(#[from] CatalogueError),

    /// Routing failed in a way that is not a per-query miss
    #[error("routing failed: {0}")]
    Router(#[from] RouterError),
}
