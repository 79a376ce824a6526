//! Source trait definitions

use async_trait::async_trait;

use crate::errors::SourceResult;

/// Provider of raw tabular video records
///
/// Each row is a sequence of string cells in the portfolio sheet column
/// layout. Implementations must not interpret the cells.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch all rows currently available
    async fn fetch_rows(&self) -> SourceResult<Vec<Vec<String>>>;

    /// Short identifier used in logs
    fn source_type(&self) -> &'static str;
}
