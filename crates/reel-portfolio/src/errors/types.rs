//! Error type definitions for the portfolio service

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Source handling errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Errors raised while pulling rows from a remote source.
///
/// Every variant is recoverable: the catalog logs it and serves the
/// bundled dataset instead.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Required access configuration (sheet id, api key) is not set
    #[error("Missing credentials: {source_type} requires {field}")]
    MissingCredentials { source_type: String, field: String },

    /// Transport-level failure (DNS, connect, timeout)
    #[error("Request failed: {url} - {message}")]
    Request { url: String, message: String },

    /// Non-success HTTP status from the source
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// The body could not be decoded into rows
    #[error("Parse error: {source_type} - {message}")]
    Parse { source_type: String, message: String },
}

/// Failure to construct an embedded player instance
#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Failed to initialize player for {video_id}: {message}")]
    InitFailed { video_id: String, message: String },
}

impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl SourceError {
    pub fn missing_credentials<S: Into<String>, F: Into<String>>(source_type: S, field: F) -> Self {
        Self::MissingCredentials {
            source_type: source_type.into(),
            field: field.into(),
        }
    }

    pub fn parse<S: Into<String>, M: Into<String>>(source_type: S, message: M) -> Self {
        Self::Parse {
            source_type: source_type.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_converts_into_app_error() {
        let err: AppError = SourceError::missing_credentials("google_sheets", "api_key").into();
        assert!(matches!(err, AppError::Source(SourceError::MissingCredentials { .. })));
        assert_eq!(
            err.to_string(),
            "Source error: Missing credentials: google_sheets requires api_key"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("video", "42");
        assert_eq!(err.to_string(), "Not found: video with id 42");
    }
}
