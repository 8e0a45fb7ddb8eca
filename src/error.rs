//! Error types for rendering build information.

/// Rendering error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON serialization failed.
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization failed.
    #[error("toml serialization failed: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;
