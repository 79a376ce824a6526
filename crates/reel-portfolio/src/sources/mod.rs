//! Video data sources
//!
//! A [`RowSource`] yields raw spreadsheet rows which are normalized by the
//! catalog; the [`fallback`] module holds the bundled dataset used whenever
//! the remote source cannot deliver.

pub mod fallback;
pub mod sheets;
pub mod traits;

pub use sheets::GoogleSheetsSource;
pub use traits::RowSource;

#[cfg(test)]
pub use traits::MockRowSource;
