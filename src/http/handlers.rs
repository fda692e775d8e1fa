//! HTTP request handlers
//!
//! Implements handlers for the transcript and track list endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::RelayError;
use crate::state::AppState;
use crate::timedtext::list::TranscriptList;
use crate::timedtext::transcript::Transcript;

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    /// Any failure while fetching or decoding upstream captions.
    Relay(RelayError),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        // Upstream, decode and parse failures are all reported the same way.
        let (status, message) = match self {
            HttpError::Relay(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<RelayError> for HttpError {
    fn from(err: RelayError) -> Self {
        HttpError::Relay(err)
    }
}

/// Query parameters for transcript requests.
#[derive(Debug, Default, Deserialize)]
pub struct TranscriptParams {
    /// Video id.
    pub id: Option<String>,
    /// Caption language.
    pub lang: Option<String>,
    /// Machine translation target language.
    pub tlang: Option<String>,
}

/// Query parameters for track list requests.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Video id.
    pub id: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("timedtext-relay v", env!("CARGO_PKG_VERSION"))
}

/// Transcript endpoint
/// GET /new?id={videoID}&lang={langCode}&tlang={langCode}
pub async fn new_transcript(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TranscriptParams>,
) -> Result<Json<Transcript>, HttpError> {
    let defaults = state.defaults();
    let id = params.id.unwrap_or_else(|| defaults.video_id.clone());
    let lang = params.lang.unwrap_or_else(|| defaults.lang.clone());
    let tlang = params.tlang.unwrap_or_default();

    let transcript = state
        .client
        .get_transcript(&lang, &id, &tlang)
        .await
        .map_err(|e| {
            tracing::warn!(
                "Transcript request failed: id={} lang={} tlang={}: {}",
                id,
                lang,
                tlang,
                e
            );
            e
        })?;

    tracing::debug!(
        "Transcript {} ({}): {} lines",
        id,
        lang,
        transcript.lines.len()
    );
    Ok(Json(transcript))
}

/// Track list endpoint
/// GET /list?id={videoID}
pub async fn show_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<TranscriptList>, HttpError> {
    let id = params
        .id
        .unwrap_or_else(|| state.defaults().video_id.clone());

    let list = state.client.get_list(&id).await.map_err(|e| {
        tracing::warn!("Track list request failed: id={}: {}", id, e);
        e
    })?;

    Ok(Json(list))
}
