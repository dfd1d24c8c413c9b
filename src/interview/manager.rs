use super::problems::{self, Problem};
use crate::error::{InterviewError, Result};
use crate::session::{InterviewSession, SessionStore, Speaker, TranscriptEntry};
use serde::Serialize;
use tracing::info;

/// Returned to the client when a session starts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStarted {
    pub session_id: String,
    pub question: String,
}

/// Outcome of asking for the next problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextProblem {
    /// The session has moved on to this problem
    Assigned(&'static Problem),
    /// Every catalog problem has already been handed out
    Exhausted,
}

/// Session lifecycle and per-session mutations on top of the store
#[derive(Clone)]
pub struct InterviewManager {
    store: SessionStore,
}

impl InterviewManager {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Start a new session on the first catalog problem
    pub async fn create_session(&self) -> Result<SessionStarted> {
        let session_id = uuid::Uuid::new_v4().to_string();
        let session = InterviewSession::new(session_id.clone(), problems::first());
        let question = session.question.clone();

        self.store.create(session).await?;
        info!("Interview session created: {}", session_id);

        Ok(SessionStarted {
            session_id,
            question,
        })
    }

    /// Advance the session to the first problem it has not seen yet
    ///
    /// Every call that returns `Assigned` moves the session forward. Once
    /// the catalog is exhausted further calls return `Exhausted` and leave
    /// the session untouched.
    pub async fn next_problem(&self, session_id: &str) -> Result<NextProblem> {
        let next = self
            .store
            .update(session_id, |session| {
                let unattempted = problems::catalog()
                    .iter()
                    .find(|p| !session.has_attempted(p.id));

                match unattempted {
                    Some(problem) => {
                        session.assign(problem);
                        NextProblem::Assigned(problem)
                    }
                    None => NextProblem::Exhausted,
                }
            })
            .await?;

        match &next {
            NextProblem::Assigned(problem) => {
                info!("Session {} moved to problem {}", session_id, problem.id)
            }
            NextProblem::Exhausted => info!("Session {} has no more problems", session_id),
        }

        Ok(next)
    }

    pub async fn append_transcript(
        &self,
        session_id: &str,
        speaker: Speaker,
        text: impl Into<String>,
    ) -> Result<()> {
        let text = text.into();
        self.store
            .update(session_id, |session| session.push_transcript(speaker, text))
            .await
    }

    /// Replace the stored code wholesale
    pub async fn update_code(&self, session_id: &str, code: impl Into<String>) -> Result<()> {
        let code = code.into();
        self.store
            .update(session_id, |session| session.set_code(code))
            .await
    }

    pub async fn get_code(&self, session_id: &str) -> Result<String> {
        self.store
            .get(session_id)
            .await
            .map(|session| session.code)
            .ok_or_else(|| InterviewError::NotFound(session_id.to_string()))
    }

    pub async fn get_transcripts(&self, session_id: &str) -> Result<Vec<TranscriptEntry>> {
        self.store
            .get(session_id)
            .await
            .map(|session| session.transcripts)
            .ok_or_else(|| InterviewError::NotFound(session_id.to_string()))
    }
}
