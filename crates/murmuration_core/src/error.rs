//! Error types for murmuration_core.
//!
//! The per-frame update has no error surface; these cover construction and
//! configuration loading.

use thiserror::Error;

/// Main error type for murmuration_core operations.
#[derive(Error, Debug)]
pub enum FlockError {
    /// A configuration value violates a precondition of the core.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The worker pool could not be started.
    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON encoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for murmuration_core operations.
pub type Result<T> = std::result::Result<T, FlockError>;

impl FlockError {
    /// Creates a new invalid-configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FlockError::invalid_config("agent count must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: agent count must be positive"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FlockError = io_err.into();
        assert!(matches!(err, FlockError::FileSystem(_)));
    }

    #[test]
    fn test_from_toml_error() {
        let parse_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: FlockError = parse_err.into();
        assert!(err.to_string().starts_with("Config parse error"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: FlockError = json_err.into();
        assert!(matches!(err, FlockError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
