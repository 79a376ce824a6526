//! Best-effort preview images for providers that publish one at a predictable URL

use super::providers::{drive_file_id, instagram_reel_id, is_google_drive, is_instagram};

/// Derive a thumbnail URL from a video URL
///
/// Only Instagram reels and Google Drive files have a derivation rule; every
/// other provider (YouTube included) yields `None` and the consumer renders a
/// placeholder.
pub fn derive_thumbnail(video_url: &str) -> Option<String> {
    if is_instagram(video_url)
        && let Some(reel_id) = instagram_reel_id(video_url)
    {
        return Some(format!("https://www.instagram.com/p/{reel_id}/media/?size=l"));
    }

    if is_google_drive(video_url)
        && let Some(file_id) = drive_file_id(video_url)
    {
        return Some(format!("https://drive.google.com/thumbnail?id={file_id}&sz=w1000"));
    }

    None
}
