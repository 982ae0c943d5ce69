//! Router error types.

use crate::catalogue::CatalogueError;

/// Errors from building the routing graph or answering route queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// A route was requested but no routing settings were supplied
    #[error("router is not initialized")]
    NotInitialized,

    /// Routing settings cannot produce valid edge weights
    #[error("invalid routing settings: {0}")]
    InvalidSettings(&'static str),

    /// Store lookup failed
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

impl RouterError {
    /// Returns true if the query named an unknown stop or route.
    pub fn is_not_found(&self) -> bool {
        match self {
            RouterError::Catalogue(err) => err.is_not_found(),
            _ => false,
        }
    }
}
