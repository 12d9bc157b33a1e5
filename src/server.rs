use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{ConnectInfo, State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use log::info;
use serde::Deserialize;

use crate::config::Config;
use crate::limit::RateLimiter;
use crate::summarize::Summarize;
use crate::youtube::{TranscriptProvider, fetch_transcript};
use crate::{extract_video_id, truncate_transcript};

const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Shared application state, cheap to clone per request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn TranscriptProvider>,
    pub summarizer: Arc<dyn Summarize>,
    pub limiter: Arc<RateLimiter>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/summarize", post(summarize_handler))
        .with_state(state)
}

/// Serve the static front-end page (never rate limited)
async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Debug, Deserialize)]
struct SummarizeRequest {
    url: Option<String>,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({"error": message}))).into_response()
}

async fn summarize_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    if !state.limiter.check(addr.ip()) {
        return StatusCode::TOO_MANY_REQUESTS.into_response();
    }

    let request = match body {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => {
            return error_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Invalid request: JSON body expected",
            );
        }
        Err(_) => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid request: JSON body expected");
        }
    };

    let Some(url) = request.url else {
        return error_response(StatusCode::BAD_REQUEST, "No URL provided");
    };

    let Some(video_id) = extract_video_id(&url) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid YouTube URL");
    };

    info!("Processing URL: {url} (ID: {video_id})");

    let Some(transcript) =
        fetch_transcript(state.provider.as_ref(), &video_id, &state.config.languages).await
    else {
        return error_response(
            StatusCode::NOT_FOUND,
            "Could not retrieve transcript (maybe no captions available?)",
        );
    };

    let transcript = truncate_transcript(transcript);
    let summary = state.summarizer.summarize(&transcript).await;

    (StatusCode::OK, Json(serde_json::json!({"summary": summary}))).into_response()
}
