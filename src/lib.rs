pub mod config;
pub mod error;
pub mod evaluation;
pub mod http;
pub mod interview;
pub mod livekit;
pub mod llm;
pub mod session;

pub use config::Config;
pub use error::{InterviewError, Result};
pub use evaluation::{EvaluationReport, Evaluator};
pub use http::{create_app, create_router, ApiError, AppState};
pub use interview::{InterviewManager, NextProblem, Problem, SessionStarted};
pub use livekit::{LiveKitService, RoomCredentials};
pub use llm::{ReportGenerator, ReportPrompt};
pub use session::{InterviewSession, SessionStore, Speaker, TranscriptEntry};
