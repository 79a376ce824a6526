//! Google Sheets v4 values source
//!
//! Reads a fixed range of the portfolio sheet through the public values
//! endpoint:
//!
//! ```text
//! {api_base_url}/v4/spreadsheets/{sheet_id}/values/{range}?key={api_key}
//! ```
//!
//! The API trims trailing empty cells, so rows come back ragged; that is left
//! for the normalizer to deal with.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::traits::RowSource;
use crate::config::SheetsConfig;
use crate::errors::{SourceError, SourceResult};
use crate::utils::http_client::StandardHttpClient;
use crate::utils::url::UrlUtils;

const SOURCE_TYPE: &str = "google_sheets";

/// Body of a `values.get` response. `values` is omitted for an empty range.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

pub struct GoogleSheetsSource {
    http_client: StandardHttpClient,
    api_base_url: String,
    sheet_id: Option<String>,
    api_key: Option<String>,
    range: String,
}

impl GoogleSheetsSource {
    pub fn from_config(config: &SheetsConfig) -> SourceResult<Self> {
        let (sheet_id, api_key) = match config.credentials() {
            Some((id, key)) => (Some(id.to_string()), Some(key.to_string())),
            None => (None, None),
        };

        Ok(Self {
            http_client: StandardHttpClient::with_timeout(config.request_timeout)?,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            sheet_id,
            api_key,
            range: config.range.clone(),
        })
    }

    /// Build the values endpoint URL
    ///
    /// # Arguments
    /// * `sheet_id` - Spreadsheet identifier
    /// * `api_key` - Public API key, appended as the `key` query parameter
    ///
    /// # Returns
    /// The full request URL with the range percent-encoded
    fn values_url(&self, sheet_id: &str, api_key: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}?key={}",
            self.api_base_url,
            urlencoding::encode(sheet_id),
            urlencoding::encode(&self.range),
            urlencoding::encode(api_key)
        )
    }

    fn credentials(&self) -> SourceResult<(&str, &str)> {
        let sheet_id = self
            .sheet_id
            .as_deref()
            .ok_or_else(|| SourceError::missing_credentials(SOURCE_TYPE, "sheet_id"))?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SourceError::missing_credentials(SOURCE_TYPE, "api_key"))?;
        Ok((sheet_id, api_key))
    }
}

/// Cells are normally formatted strings; numbers and booleans are rendered
/// back to text so a sheet with unformatted values still parses.
fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl RowSource for GoogleSheetsSource {
    async fn fetch_rows(&self) -> SourceResult<Vec<Vec<String>>> {
        let (sheet_id, api_key) = self.credentials()?;
        let url = self.values_url(sheet_id, api_key);

        info!(
            "Fetching portfolio rows from {}",
            UrlUtils::obfuscate_credentials(&url)
        );

        let body: ValueRange = self.http_client.fetch_json(&url).await?;
        let rows: Vec<Vec<String>> = body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();

        debug!("Google Sheets returned {} rows", rows.len());
        Ok(rows)
    }

    fn source_type(&self) -> &'static str {
        SOURCE_TYPE
    }
}
