//! Ad-hoc embed resolution endpoint

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Serialize;

use crate::embed::{PlaybackSpec, derive_thumbnail, direct_media_url};
use crate::errors::AppResult;
use crate::web::{
    AppState,
    extractors::{EmbedParams, RequestContext},
    responses::handle_result,
    utils::log_request,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedResponse {
    pub playback: PlaybackSpec,
    pub thumbnail: Option<String>,
    pub direct_media_url: Option<String>,
}

fn build_embed_response(state: &AppState, params: &EmbedParams) -> AppResult<EmbedResponse> {
    let (url, context) = params.validate()?;

    Ok(EmbedResponse {
        playback: state.resolver.resolve(url, context),
        thumbnail: derive_thumbnail(url),
        direct_media_url: direct_media_url(url),
    })
}

/// Resolve `?url=` into its playback representation
pub async fn resolve_embed(
    State(state): State<AppState>,
    Query(params): Query<EmbedParams>,
    context: RequestContext,
) -> Response {
    log_request(&context);
    handle_result(build_embed_response(&state, &params))
}
