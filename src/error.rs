//! Crate-level error type

use thiserror::Error;

use crate::api::ApiError;
use crate::routing::RouteError;

/// Errors surfaced by the console
#[derive(Debug, Error)]
pub enum RainbowError {
    /// Configuration file missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Route table could not be built
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Fetching a resource failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Template could not be rendered
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Matched route carries no tenant identifier
    #[error("Route for {0} has no tenant identifier")]
    MissingTenant(String),

    /// Activation was cancelled by a later navigation
    #[error("Navigation to {0} was superseded")]
    Superseded(String),

    /// Fetch task panicked
    #[error("Fetch task for {0} failed")]
    TaskFailed(String),

    #[error("Failed to serialize view: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, RainbowError>;
