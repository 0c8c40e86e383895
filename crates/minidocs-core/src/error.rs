//! Error types for Minidocs core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Minidocs core operations.
///
/// Sidebar operations never fail; these only surface when menus,
/// configuration or pages are loaded.
#[derive(Debug, Error)]
pub enum Error {
    /// Menu data is structurally invalid.
    #[error("Invalid menu: {0}")]
    InvalidMenu(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No page is registered for the route.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
