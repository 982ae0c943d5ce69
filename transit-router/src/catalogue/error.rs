//! Network store error types.

/// Errors raised while populating or querying the network store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// No stop with this name has been added
    #[error("stop not found: {0}")]
    StopNotFound(String),

    /// No route with this name has been added
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// Neither direction of the distance was ever set
    #[error("no distance data between {from} and {to}")]
    NoDistanceData { from: String, to: String },
}

impl CatalogueError {
    /// Returns true for lookups of unknown names.
    ///
    /// These are answered per query with a "not found" response; every
    /// other error is a broken data contract.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogueError::StopNotFound(_) | CatalogueError::RouteNotFound(_)
        )
    }
}
