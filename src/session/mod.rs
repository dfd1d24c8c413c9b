//! Interview session state
//!
//! This module provides:
//! - `InterviewSession`: per-candidate problem, code and transcript state
//! - `TranscriptEntry` / `Speaker`: one attributed turn of speech
//! - `SessionStore`: the shared in-memory table of live sessions

mod session;
mod store;
mod transcript;

pub use session::InterviewSession;
pub use store::SessionStore;
pub use transcript::{Speaker, TranscriptEntry};
