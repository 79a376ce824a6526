//! Request extractors and query parameter validation

use axum::{
    extract::FromRequestParts,
    http::{Method, request::Parts},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::ALL_CATEGORY;
use crate::embed::PlaybackContext;
use crate::errors::{AppError, AppResult};

/// Per-request metadata used for logging
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub user_agent: Option<String>,
    pub real_ip: Option<String>,
    pub request_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let real_ip = parts
            .headers
            .get("x-real-ip")
            .or_else(|| parts.headers.get("x-forwarded-for"))
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split(',').next())
            .map(|s| s.trim().to_string());

        Ok(Self {
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            user_agent,
            real_ip,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now(),
        })
    }
}

/// `?tag=` filter for video listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoFilterParams {
    pub tag: Option<String>,
}

impl VideoFilterParams {
    /// Requested category, `"All"` when absent or blank
    pub fn category(&self) -> &str {
        self.tag
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(ALL_CATEGORY)
    }
}

/// `?seed=` for a reproducible portfolio order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShuffleParams {
    pub seed: Option<u64>,
}

/// `?url=&mode=` for ad-hoc embed resolution
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedParams {
    pub url: Option<String>,
    pub mode: Option<String>,
}

impl EmbedParams {
    /// Validated url and playback context; mode defaults to `modal`
    pub fn validate(&self) -> AppResult<(&str, PlaybackContext)> {
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::validation("Query parameter 'url' is required"))?;

        let context = match self.mode.as_deref().map(str::trim) {
            None | Some("") | Some("modal") => PlaybackContext::modal(),
            Some("ambient") => PlaybackContext::ambient(),
            Some(other) => {
                return Err(AppError::validation(format!(
                    "Unknown mode '{}', expected 'ambient' or 'modal'",
                    other
                )));
            }
        };

        Ok((url, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_to_all() {
        assert_eq!(VideoFilterParams::default().category(), "All");
        let params = VideoFilterParams {
            tag: Some("  ".to_string()),
        };
        assert_eq!(params.category(), "All");
        let params = VideoFilterParams {
            tag: Some("Commercial".to_string()),
        };
        assert_eq!(params.category(), "Commercial");
    }

    #[test]
    fn test_embed_params_validation() {
        let params = EmbedParams {
            url: Some(" https://youtu.be/abc ".to_string()),
            mode: Some("ambient".to_string()),
        };
        let (url, context) = params.validate().unwrap();
        assert_eq!(url, "https://youtu.be/abc");
        assert!(context.autoplay_intent);

        let missing = EmbedParams::default();
        assert!(matches!(missing.validate(), Err(AppError::Validation { .. })));

        let bad_mode = EmbedParams {
            url: Some("https://youtu.be/abc".to_string()),
            mode: Some("fullscreen".to_string()),
        };
        assert!(bad_mode.validate().is_err());
    }
}
