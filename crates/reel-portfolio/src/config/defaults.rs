/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// Google Sheets defaults
pub const DEFAULT_SHEETS_API_BASE_URL: &str = "https://sheets.googleapis.com";
// Columns A..I cover video url through software; row 1 is the header.
pub const DEFAULT_SHEETS_RANGE: &str = "Sheet1!A2:I1000";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// Portfolio defaults
pub const DEFAULT_FEATURED_CLIENT: &str = "Atlin";
pub const DEFAULT_LOCAL_MEDIA_PREFIX: &str = "/videos/";

// Environment overrides, e.g. REEL_PORTFOLIO_SHEETS__API_KEY
pub const ENV_PREFIX: &str = "REEL_PORTFOLIO_";
pub const ENV_SEPARATOR: &str = "__";
