use super::error::ApiError;
use super::state::AppState;
use crate::error::InterviewError;
use crate::evaluation::EvaluationReport;
use crate::interview::{NextProblem, SessionStarted};
use crate::livekit::RoomCredentials;
use crate::session::{Speaker, TranscriptEntry};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AppendTranscriptRequest {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCodeRequest {
    pub code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub session_id: Option<String>,
    pub identity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct CodeResponse {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptsResponse {
    pub transcripts: Vec<TranscriptEntry>,
}

#[derive(Debug, Serialize)]
pub struct NoMoreProblemsResponse {
    pub question: Option<String>,
    pub message: String,
}

fn success() -> Json<SuccessResponse> {
    Json(SuccessResponse { success: true })
}

/// Some(non-empty value) or None
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /session/start
/// Create a session on the first problem
pub async fn start_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionStarted>), ApiError> {
    info!("Creating new interview session");

    let started = state.manager.create_session().await?;

    info!("Session created: {}", started.session_id);
    Ok((StatusCode::CREATED, Json(started)))
}

/// POST /session/:session_id/transcript
/// Append one transcript line
pub async fn append_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Result<Json<AppendTranscriptRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(req) = body?;

    state
        .manager
        .append_transcript(&session_id, req.speaker, req.text)
        .await?;

    Ok(success())
}

/// POST /session/:session_id/code
/// Replace the stored code
pub async fn update_code(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Result<Json<UpdateCodeRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(req) = body?;

    state.manager.update_code(&session_id, req.code).await?;

    Ok(success())
}

/// GET /session/:session_id/code
pub async fn get_code(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<CodeResponse>, ApiError> {
    let code = state.manager.get_code(&session_id).await?;
    Ok(Json(CodeResponse { code }))
}

/// GET /session/:session_id/transcripts
pub async fn get_transcripts(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<TranscriptsResponse>, ApiError> {
    let transcripts = state.manager.get_transcripts(&session_id).await?;
    Ok(Json(TranscriptsResponse { transcripts }))
}

/// GET /session/:session_id/next-problem
/// Advance to the next unattempted problem (each call advances)
pub async fn next_problem(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Response, ApiError> {
    let response = match state.manager.next_problem(&session_id).await? {
        NextProblem::Assigned(problem) => Json(problem).into_response(),
        NextProblem::Exhausted => Json(NoMoreProblemsResponse {
            question: None,
            message: "No more problems".to_string(),
        })
        .into_response(),
    };

    Ok(response)
}

/// POST /evaluate
/// Produce the final report and retire the session
pub async fn evaluate(
    State(state): State<AppState>,
    body: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluationReport>, ApiError> {
    let Json(req) = body?;
    let session_id = required(req.session_id)
        .ok_or_else(|| InterviewError::Validation("sessionId is required".to_string()))?;

    let report = state.evaluator.evaluate(&session_id).await?;

    info!("Sending evaluation report for {}", session_id);
    Ok(Json(report))
}

/// POST /livekit/token
/// Create the room, dispatch the agent and sign a candidate token
pub async fn livekit_token(
    State(state): State<AppState>,
    body: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<RoomCredentials>, ApiError> {
    let Json(req) = body?;

    let (session_id, identity) = match (required(req.session_id), required(req.identity)) {
        (Some(session_id), Some(identity)) => (session_id, identity),
        _ => return Err(ApiError::bad_request("sessionId and identity are required")),
    };

    let livekit = state
        .livekit
        .as_ref()
        .ok_or_else(|| ApiError::unavailable("Real-time rooms are not configured"))?;

    info!("Issuing room credentials for {} in {}", identity, session_id);

    let credentials = livekit
        .issue_credentials(&session_id, &identity)
        .await
        .map_err(InterviewError::from)?;

    Ok(Json(credentials))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
