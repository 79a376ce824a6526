//! Bundled static video catalog

use tracing::error;

use crate::assets::DataAssets;
use crate::models::Video;

/// Load the embedded fallback dataset
///
/// The dataset is compiled into the binary, so a missing or unreadable asset
/// is a packaging bug; it is logged and an empty catalog is served.
pub fn static_videos() -> Vec<Video> {
    let Some(file) = DataAssets::get_asset(DataAssets::FALLBACK_VIDEOS) else {
        error!("Fallback dataset {} is not embedded", DataAssets::FALLBACK_VIDEOS);
        return Vec::new();
    };

    match serde_json::from_slice::<Vec<Video>>(&file.data) {
        Ok(videos) => videos,
        Err(e) => {
            error!("Fallback dataset {} is invalid: {}", DataAssets::FALLBACK_VIDEOS, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_static_dataset_is_canonical() {
        let videos = static_videos();
        assert!(!videos.is_empty());

        let ids: HashSet<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), videos.len());
        assert!(videos.iter().all(|v| !v.video_url.is_empty()));
    }

    #[test]
    fn test_static_dataset_has_featured_client() {
        assert!(static_videos().iter().any(|v| v.is_from_client("Atlin")));
    }
}
