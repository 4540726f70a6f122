//! Error types for comfort-map-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during author analysis.
///
/// Degenerate inputs (zero messages, zero sentences, zero words) are
/// deliberately NOT errors: every ratio in the profile falls back to zero
/// instead. Only precondition violations surface here.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The author identifier is empty or whitespace-only.
    #[error("author identifier must not be blank")]
    BlankAuthor,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
