// HTTP API surface
// Thin glue over the validation pipeline and the mob store.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::classify::MobAssignment;
use crate::error::MilkMobError;
use crate::metadata::VideoMetadata;
use crate::scoring::{ScoreDelta, ScoringMethod};
use crate::store::{AcceptedVideo, MobStore};
use crate::taxonomy::{find_mob, MobDefinition, BUILTIN_MOBS};
use crate::validate::{ValidationOutcome, ValidationPipeline, VideoSource};

pub struct AppState {
    pub pipeline: ValidationPipeline,
    pub store: Arc<dyn MobStore>,
    pub extractor_available: bool,
    pub staging_dir: String,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/validate", post(validate))
        .route("/mobs", get(list_mobs))
        .route("/mob/:id", get(mob_feed))
        .route("/api/status", get(status))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

// ----- Request / response shapes -----

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub source_kind: String,
    pub payload: String,
    #[serde(default)]
    pub hashtags: String,
    pub submitter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub is_valid: bool,
    pub confidence: f64,
    pub content_score: f64,
    pub hashtag_score: f64,
    pub reason: String,
    pub method: ScoringMethod,
    pub trace: Vec<ScoreDelta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mob_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mob_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_reasons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoMetadata>,
}

impl From<ValidationOutcome> for ValidateResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        let (mob_id, mob_key, mob_name, match_reasons) = match outcome.assignment {
            Some(MobAssignment {
                mob_id,
                mob_key,
                mob_name,
                reasons,
                ..
            }) => (Some(mob_id), Some(mob_key), Some(mob_name), Some(reasons)),
            None => (None, None, None, None),
        };

        Self {
            is_valid: outcome.result.is_valid,
            confidence: outcome.result.confidence,
            content_score: outcome.result.content_score,
            hashtag_score: outcome.result.hashtag_score,
            reason: outcome.result.reason,
            method: outcome.result.method,
            trace: outcome.result.trace,
            mob_id,
            mob_key,
            mob_name,
            match_reasons,
            video: outcome.video,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MobFeedResponse {
    pub mob: &'static MobDefinition,
    pub videos: Vec<AcceptedVideo>,
    pub member_count: usize,
    pub average_confidence_pct: u32,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub extractor_available: bool,
    pub content_search: bool,
    pub mob_count: usize,
    pub stored_videos: usize,
    pub staging_dir: String,
}

// ----- Handlers -----

async fn validate(
    State(state): State<SharedState>,
    Json(request): Json<ValidateRequest>,
) -> std::result::Result<Json<ValidateResponse>, ApiError> {
    let source = match request.source_kind.as_str() {
        "url" => VideoSource::Url(request.payload),
        "file" => VideoSource::File(request.payload.into()),
        other => {
            return Err(ApiError(MilkMobError::Input(format!(
                "unknown source_kind '{}'; expected \"file\" or \"url\"",
                other
            ))))
        }
    };
    let submitter = request.submitter.unwrap_or_else(|| "you".to_string());

    let outcome = state
        .pipeline
        .validate(source, &request.hashtags, &submitter)
        .await
        .map_err(ApiError)?;

    Ok(Json(outcome.into()))
}

async fn list_mobs() -> Json<Vec<&'static MobDefinition>> {
    Json(BUILTIN_MOBS.iter().collect())
}

async fn mob_feed(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> std::result::Result<Json<MobFeedResponse>, ApiError> {
    let mob = find_mob(&id).ok_or_else(|| ApiError(MilkMobError::MobNotFound(id.clone())))?;
    let feed = state.store.feed(&id).map_err(ApiError)?;

    Ok(Json(MobFeedResponse {
        mob,
        member_count: feed.videos.len(),
        average_confidence_pct: feed.average_confidence_pct,
        videos: feed.videos,
    }))
}

async fn status(State(state): State<SharedState>) -> std::result::Result<Json<StatusResponse>, ApiError> {
    let counts = state.store.counts().map_err(ApiError)?;
    Ok(Json(StatusResponse {
        extractor_available: state.extractor_available,
        content_search: state.pipeline.search_enabled(),
        mob_count: BUILTIN_MOBS.len(),
        stored_videos: counts.values().sum(),
        staging_dir: state.staging_dir.clone(),
    }))
}

// ----- Error mapping -----

pub struct ApiError(MilkMobError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MilkMobError::Input(_) => StatusCode::BAD_REQUEST,
            MilkMobError::MobNotFound(_) => StatusCode::NOT_FOUND,
            MilkMobError::Extraction(_) | MilkMobError::Search(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
