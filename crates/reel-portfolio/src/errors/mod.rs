//! Centralized error handling for the portfolio service
//!
//! Almost nothing in the catalog path is allowed to fail outward: source
//! failures are absorbed into the static fallback and malformed rows are
//! absorbed by defaults. What remains here is the small set of errors that
//! can legitimately reach a caller.
//!
//! # Error Categories
//!
//! - **Source Errors**: remote row source unavailable, rejected or undecodable
//! - **Web Errors**: unknown resources and invalid request parameters
//! - **Configuration Errors**: invalid settings detected at startup
//!
//! # Usage
//!
//! ```rust
//! use reel_portfolio::errors::{AppError, AppResult};
//!
//! fn lookup(id: &str) -> AppResult<String> {
//!     Err(AppError::not_found("video", id))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;
