/*!
 * Embed Resolution Module
 * =======================
 *
 * Turns the raw `videoUrl` of a portfolio piece into something a player can
 * load:
 *
 * ```text
 *     - LocalMedia      native <video> element, path served as-is
 *     - ProviderEmbed   iframe URL for YouTube / Vimeo / Instagram / Google Drive
 *     - PassThrough     unknown host, raw URL used as the embed source
 * ```
 *
 * Classification walks the ordered rule table in `providers` once and the
 * first matching rule wins. Order matters: the local prefix is checked
 * before any host rule, and Drive before the others.
 *
 * Two playback contexts produce different URLs for the same video:
 *   - modal    user-initiated lightbox playback, controls on
 *   - ambient  hero background playback, muted + looping + chromeless
 *
 * A rule whose host matches but whose identifier cannot be extracted
 * degrades to PassThrough with the original URL. A malformed embed URL is
 * never produced.
 */

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::defaults::DEFAULT_LOCAL_MEDIA_PREFIX;
use crate::utils::url::UrlUtils;

mod providers;
pub mod thumbnail;

pub use providers::direct_media_url;
pub use thumbnail::derive_thumbnail;

/// Hosting providers that get a dedicated embed URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "youtube")]
    YouTube,
    #[serde(rename = "vimeo")]
    Vimeo,
    #[serde(rename = "instagram")]
    Instagram,
    #[serde(rename = "google_drive")]
    GoogleDrive,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::Vimeo => "vimeo",
            Self::Instagram => "instagram",
            Self::GoogleDrive => "google_drive",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the resolved URL is going to be played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackContext {
    /// `true` for ambient (hero) playback, `false` for modal playback
    pub autoplay_intent: bool,
}

impl PlaybackContext {
    pub const fn modal() -> Self {
        Self {
            autoplay_intent: false,
        }
    }

    pub const fn ambient() -> Self {
        Self {
            autoplay_intent: true,
        }
    }
}

/// Embeddable-player variables for YouTube ambient playback
///
/// Field order is the order the parameters appear in the iframe URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerVars {
    pub autoplay: u8,
    pub mute: u8,
    #[serde(rename = "loop")]
    pub loop_playback: u8,
    /// Looping a single video requires it to be its own playlist
    pub playlist: String,
    pub controls: u8,
    pub showinfo: u8,
    pub rel: u8,
    pub modestbranding: u8,
    pub enablejsapi: u8,
    pub playsinline: u8,
}

impl PlayerVars {
    /// Muted, looping, chromeless background playback of `video_id`
    pub fn ambient(video_id: &str) -> Self {
        Self {
            autoplay: 1,
            mute: 1,
            loop_playback: 1,
            playlist: video_id.to_string(),
            controls: 0,
            showinfo: 0,
            rel: 0,
            modestbranding: 1,
            enablejsapi: 1,
            playsinline: 1,
        }
    }

    pub fn to_query(&self) -> String {
        format!(
            "autoplay={}&mute={}&loop={}&playlist={}&controls={}&showinfo={}&rel={}&modestbranding={}&enablejsapi={}&playsinline={}",
            self.autoplay,
            self.mute,
            self.loop_playback,
            urlencoding::encode(&self.playlist),
            self.controls,
            self.showinfo,
            self.rel,
            self.modestbranding,
            self.enablejsapi,
            self.playsinline,
        )
    }
}

/// Configuration handed to a stateful embeddable player instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub video_id: String,
    pub player_vars: PlayerVars,
}

/// How a video should be played back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlaybackSpec {
    /// File bundled with the site; render a native media element
    LocalMedia { path: String },
    /// Provider iframe URL
    ProviderEmbed {
        url: String,
        provider: Provider,
        /// Present only when the provider's player API drives playback
        #[serde(skip_serializing_if = "Option::is_none")]
        player: Option<PlayerConfig>,
    },
    /// Unknown provider; the raw URL is the embed source
    PassThrough { url: String },
}

impl PlaybackSpec {
    /// URL to load, whichever variant this is
    pub fn url(&self) -> &str {
        match self {
            Self::LocalMedia { path } => path,
            Self::ProviderEmbed { url, .. } | Self::PassThrough { url } => url,
        }
    }

    pub fn provider(&self) -> Option<Provider> {
        match self {
            Self::ProviderEmbed { provider, .. } => Some(*provider),
            _ => None,
        }
    }
}

/// Classifies video URLs against the provider rule table
#[derive(Debug, Clone)]
pub struct EmbedResolver {
    local_prefix: String,
}

impl Default for EmbedResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_MEDIA_PREFIX)
    }
}

impl EmbedResolver {
    pub fn new<S: Into<String>>(local_prefix: S) -> Self {
        Self {
            local_prefix: local_prefix.into(),
        }
    }

    pub fn local_prefix(&self) -> &str {
        &self.local_prefix
    }

    /// Resolve `video_url` for the given playback context. Never fails.
    pub fn resolve(&self, video_url: &str, context: PlaybackContext) -> PlaybackSpec {
        if video_url.starts_with(&self.local_prefix) {
            return PlaybackSpec::LocalMedia {
                path: video_url.to_string(),
            };
        }

        let Some(rule) = providers::PROVIDER_RULES
            .iter()
            .find(|rule| (rule.matches)(video_url))
        else {
            debug!(
                host = ?UrlUtils::extract_domain(video_url),
                "Unrecognized provider, passing URL through"
            );
            return PlaybackSpec::PassThrough {
                url: video_url.to_string(),
            };
        };

        match (rule.extract_id)(video_url) {
            Some(id) => {
                let (url, player) = (rule.build)(id, context);
                PlaybackSpec::ProviderEmbed {
                    url,
                    provider: rule.provider,
                    player,
                }
            }
            None => {
                debug!(
                    provider = %rule.provider,
                    url = %UrlUtils::obfuscate_credentials(video_url),
                    "Could not extract video identifier, passing URL through"
                );
                PlaybackSpec::PassThrough {
                    url: video_url.to_string(),
                }
            }
        }
    }
}

/// Resolve with the default local-media prefix
pub fn resolve_embed(video_url: &str, context: PlaybackContext) -> PlaybackSpec {
    EmbedResolver::default().resolve(video_url, context)
}
