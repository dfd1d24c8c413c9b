use super::extract::extract_json;
use super::participation::has_participation;
use super::prompt::build_prompt;
use super::report::{normalize, EvaluationReport};
use crate::error::{InterviewError, Result};
use crate::llm::ReportGenerator;
use crate::session::{SessionStore, TranscriptEntry};
use std::sync::Arc;
use tracing::{debug, error, info};

/// What the evaluator reads from a session
#[derive(Debug, Clone)]
pub struct EvaluationInput {
    pub question: String,
    pub code: String,
    pub transcripts: Vec<TranscriptEntry>,
}

/// Turns a finished session into a report and retires it
#[derive(Clone)]
pub struct Evaluator {
    store: SessionStore,
    generator: Arc<dyn ReportGenerator>,
    temperature: f64,
}

impl Evaluator {
    pub fn new(store: SessionStore, generator: Arc<dyn ReportGenerator>, temperature: f64) -> Self {
        Self {
            store,
            generator,
            temperature,
        }
    }

    /// Evaluate a session and delete it
    ///
    /// The session is deleted only once a report exists; a failed LLM call
    /// leaves it in place. Exactly one caller gets a report per session.
    pub async fn evaluate(&self, session_id: &str) -> Result<EvaluationReport> {
        info!("Evaluate requested for: {}", session_id);
        debug!("Live sessions: {:?}", self.store.ids().await);

        let session = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| InterviewError::NotFound(session_id.to_string()))?;

        info!(
            "Evaluating session {} (code_len={}, transcripts={})",
            session_id,
            session.code.len(),
            session.transcripts.len()
        );

        let input = EvaluationInput {
            question: session.question,
            code: session.code,
            transcripts: session.transcripts,
        };

        let report = self.run(&input).await.inspect_err(|e| {
            error!("Evaluation failed for {}: {}", session_id, e);
        })?;

        if self.store.delete(session_id).await.is_none() {
            // Another request evaluated this session while we were waiting on the LLM.
            return Err(InterviewError::NotFound(session_id.to_string()));
        }
        info!("Deleted session after evaluation: {}", session_id);

        Ok(report)
    }

    /// Produce a report without touching the store
    pub async fn run(&self, input: &EvaluationInput) -> Result<EvaluationReport> {
        if !has_participation(&input.code, &input.transcripts) {
            info!("No participation detected, skipping LLM call");
            return Ok(EvaluationReport::no_participation());
        }

        let prompt = build_prompt(
            &input.question,
            &input.code,
            &input.transcripts,
            self.temperature,
        );

        let text = self.generator.generate_report(&prompt).await?;
        info!(
            "{} returned {} chars",
            self.generator.provider_name(),
            text.len()
        );

        let value = extract_json(&text).map_err(|e| InterviewError::ReportParse(e.to_string()))?;
        normalize(value).map_err(InterviewError::ReportParse)
    }
}
