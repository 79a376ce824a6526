//! Portfolio catalog HTTP handlers

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{CatalogOrigin, shuffle};
use crate::embed::{PlaybackContext, PlaybackSpec};
use crate::errors::AppError;
use crate::models::Video;
use crate::web::{
    AppState,
    extractors::{RequestContext, ShuffleParams, VideoFilterParams},
    responses::{handle_error, ok},
    utils::log_request,
};

/// Everything the landing page needs in one response
#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub featured: Option<Video>,
    pub videos: Vec<Video>,
    pub categories: Vec<String>,
    pub source: CatalogOrigin,
}

/// A video together with how to play it
#[derive(Debug, Serialize)]
pub struct VideoPlaybackResponse {
    pub video: Option<Video>,
    pub playback: Option<PlaybackSpec>,
}

/// Featured pick, shuffled grid and category list
///
/// The featured video is chosen from canonical order before shuffling.
pub async fn get_portfolio(
    State(state): State<AppState>,
    Query(params): Query<ShuffleParams>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(&context);

    let snapshot = state.catalog.load().await;
    let featured = snapshot
        .featured(&state.config.portfolio.featured_client)
        .cloned();

    let videos = match params.seed {
        Some(seed) => shuffle(&snapshot.videos, &mut StdRng::seed_from_u64(seed)),
        None => shuffle(&snapshot.videos, &mut rand::rng()),
    };

    ok(PortfolioResponse {
        featured,
        videos,
        categories: snapshot.categories(),
        source: snapshot.origin,
    })
}

/// Videos in canonical order, optionally filtered by `?tag=`
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<VideoFilterParams>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(&context);

    let snapshot = state.catalog.load().await;
    let videos = snapshot.filter_by_tag(params.category());
    debug!("{} videos match category '{}'", videos.len(), params.category());
    ok(videos)
}

/// Single video with modal (click-to-play) playback
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
    context: RequestContext,
) -> Response {
    log_request(&context);

    let snapshot = state.catalog.load().await;
    let Some(video) = snapshot.find(&id).cloned() else {
        return handle_error(AppError::not_found("video", id)).into_response();
    };

    let playback = state
        .resolver
        .resolve(&video.video_url, PlaybackContext::modal());

    ok(VideoPlaybackResponse {
        video: Some(video),
        playback: Some(playback),
    })
    .into_response()
}

pub async fn list_categories(
    State(state): State<AppState>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(&context);
    ok(state.catalog.load().await.categories())
}

/// Featured video with ambient (muted, looping) playback
pub async fn get_hero(State(state): State<AppState>, context: RequestContext) -> impl IntoResponse {
    log_request(&context);

    let snapshot = state.catalog.load().await;
    let video = snapshot
        .featured(&state.config.portfolio.featured_client)
        .cloned();
    let playback = video
        .as_ref()
        .map(|v| state.resolver.resolve(&v.video_url, PlaybackContext::ambient()));

    ok(VideoPlaybackResponse { video, playback })
}
