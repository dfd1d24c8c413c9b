//! HTTP API for the interview frontend and the voice agent
//!
//! - POST /session/start - Start a new interview session
//! - POST /session/:id/transcript - Append a transcript line
//! - POST /session/:id/code - Replace the candidate's code
//! - GET /session/:id/code - Current code
//! - GET /session/:id/transcripts - Transcript so far
//! - GET /session/:id/next-problem - Advance to the next problem
//! - POST /evaluate - Final report (deletes the session)
//! - POST /livekit/token - Room credentials for the candidate
//! - GET /health - Health check

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::{create_app, create_router};
pub use state::AppState;
