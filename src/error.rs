use crate::livekit::LiveKitError;
use crate::llm::LlmError;
use thiserror::Error;

/// Errors surfaced by the interview core (store, manager, evaluation)
#[derive(Debug, Error)]
pub enum InterviewError {
    /// Session id is not in the store (never issued, or already evaluated)
    #[error("session {0} not found")]
    NotFound(String),

    /// Session id collision on insert
    #[error("session {0} already exists")]
    AlreadyExists(String),

    /// Missing or malformed request field
    #[error("invalid input: {0}")]
    Validation(String),

    /// LLM provider failed or returned nothing
    #[error("LLM provider failed: {0}")]
    Upstream(#[from] LlmError),

    /// Completion text did not contain a usable JSON report
    #[error("failed to parse evaluation report: {0}")]
    ReportParse(String),

    /// Media server call failed
    #[error("real-time bridge failed: {0}")]
    Bridge(#[from] LiveKitError),
}

pub type Result<T> = std::result::Result<T, InterviewError>;
