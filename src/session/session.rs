use super::transcript::{Speaker, TranscriptEntry};
use crate::interview::Problem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interview state for one candidate, from session start until evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    /// Opaque unique identifier (UUID v4)
    pub session_id: String,

    /// Prompt text of the problem currently being worked on
    pub question: String,

    /// Catalog id of the current problem
    pub current_problem_id: u32,

    /// Problems handed out so far, in the order they were assigned
    pub problems_attempted: Vec<u32>,

    /// Latest editor contents (last write wins)
    pub code: String,

    /// Conversation so far, in arrival order
    pub transcripts: Vec<TranscriptEntry>,

    /// When the session was created
    pub started_at: DateTime<Utc>,
}

impl InterviewSession {
    /// Create a fresh session starting on `problem`
    pub fn new(session_id: String, problem: &Problem) -> Self {
        Self {
            session_id,
            question: problem.question.to_string(),
            current_problem_id: problem.id,
            problems_attempted: vec![problem.id],
            code: String::new(),
            transcripts: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn has_attempted(&self, problem_id: u32) -> bool {
        self.problems_attempted.contains(&problem_id)
    }

    /// Move the session onto `problem`
    pub fn assign(&mut self, problem: &Problem) {
        self.current_problem_id = problem.id;
        if !self.has_attempted(problem.id) {
            self.problems_attempted.push(problem.id);
        }
        self.question = problem.question.to_string();
    }

    pub fn push_transcript(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.transcripts.push(TranscriptEntry::new(speaker, text));
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }
}
