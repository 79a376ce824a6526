use rust_embed::RustEmbed;

/// Embedded static datasets
#[derive(RustEmbed)]
#[folder = "data/"]
#[prefix = "data/"]
pub struct DataAssets;

impl DataAssets {
    /// Path of the bundled fallback video catalog
    pub const FALLBACK_VIDEOS: &'static str = "data/videos.json";

    /// Get an embedded file by path
    pub fn get_asset(path: &str) -> Option<rust_embed::EmbeddedFile> {
        Self::get(path)
    }
}
