//! Ordered provider rule table
//!
//! Each rule pairs a cheap host predicate with an identifier extractor and an
//! embed URL builder. The table order is the classification priority.

use super::{PlaybackContext, PlayerConfig, PlayerVars, Provider};
use crate::utils::url::UrlUtils;

// Characters that end an identifier path segment
const SEGMENT_END: &[char] = &['/', '?', '#', '&'];

pub(crate) struct ProviderRule {
    pub provider: Provider,
    pub matches: fn(&str) -> bool,
    pub extract_id: fn(&str) -> Option<&str>,
    pub build: fn(&str, PlaybackContext) -> (String, Option<PlayerConfig>),
}

pub(crate) const PROVIDER_RULES: &[ProviderRule] = &[
    ProviderRule {
        provider: Provider::GoogleDrive,
        matches: is_google_drive,
        extract_id: drive_file_id,
        build: build_drive,
    },
    ProviderRule {
        provider: Provider::Instagram,
        matches: is_instagram,
        extract_id: instagram_reel_id,
        build: build_instagram,
    },
    ProviderRule {
        provider: Provider::YouTube,
        matches: is_youtube,
        extract_id: youtube_video_id,
        build: build_youtube,
    },
    ProviderRule {
        provider: Provider::Vimeo,
        matches: is_vimeo,
        extract_id: vimeo_video_id,
        build: build_vimeo,
    },
];

pub(crate) fn is_google_drive(url: &str) -> bool {
    url.contains("drive.google.com/file")
}

pub(crate) fn is_instagram(url: &str) -> bool {
    url.contains("instagram.com")
}

fn is_youtube(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

fn is_vimeo(url: &str) -> bool {
    url.contains("vimeo.com")
}

/// `.../file/d/{id}/view` → `{id}`
pub(crate) fn drive_file_id(url: &str) -> Option<&str> {
    UrlUtils::segment_after(url, "/d/", SEGMENT_END)
}

/// `.../reel/{id}/` and `.../{user}/reel/{id}/?hl=en` → `{id}`
pub(crate) fn instagram_reel_id(url: &str) -> Option<&str> {
    UrlUtils::segment_after(url, "/reel/", SEGMENT_END)
}

/// Short links carry the id in the path, `youtube.com` links in `v`.
/// Decided by host: `watch?v={id}&feature=youtu.be` is a `youtube.com` link.
fn youtube_video_id(url: &str) -> Option<&str> {
    let is_short_link = match UrlUtils::extract_domain(url) {
        Some(host) => host == "youtu.be" || host.ends_with(".youtu.be"),
        None => url.starts_with("youtu.be/"),
    };

    if is_short_link {
        UrlUtils::segment_after(url, "youtu.be/", SEGMENT_END)
    } else {
        UrlUtils::query_param(url, "v")
    }
}

fn vimeo_video_id(url: &str) -> Option<&str> {
    UrlUtils::segment_after(url, "vimeo.com/", SEGMENT_END)
        .filter(|id| id.chars().all(|c| c.is_ascii_digit()))
}

fn build_drive(id: &str, context: PlaybackContext) -> (String, Option<PlayerConfig>) {
    let url = if context.autoplay_intent {
        format!("https://drive.google.com/file/d/{id}/preview?autoplay=1&loop=1")
    } else {
        format!("https://drive.google.com/file/d/{id}/preview")
    };
    (url, None)
}

fn build_instagram(id: &str, _context: PlaybackContext) -> (String, Option<PlayerConfig>) {
    (format!("https://www.instagram.com/reel/{id}/embed/captioned"), None)
}

fn build_youtube(id: &str, context: PlaybackContext) -> (String, Option<PlayerConfig>) {
    if !context.autoplay_intent {
        return (format!("https://www.youtube.com/embed/{id}?autoplay=1"), None);
    }

    let player_vars = PlayerVars::ambient(id);
    let url = format!("https://www.youtube.com/embed/{id}?{}", player_vars.to_query());
    let player = PlayerConfig {
        video_id: id.to_string(),
        player_vars,
    };
    (url, Some(player))
}

fn build_vimeo(id: &str, context: PlaybackContext) -> (String, Option<PlayerConfig>) {
    let url = if context.autoplay_intent {
        format!("https://player.vimeo.com/video/{id}?autoplay=1&muted=1&loop=1&controls=0&background=1")
    } else {
        format!("https://player.vimeo.com/video/{id}?autoplay=1")
    };
    (url, None)
}

/// Direct download reference for Google Drive files, for native playback
pub fn direct_media_url(video_url: &str) -> Option<String> {
    if !is_google_drive(video_url) {
        return None;
    }
    drive_file_id(video_url).map(|id| format!("https://drive.google.com/uc?export=download&id={id}"))
}
