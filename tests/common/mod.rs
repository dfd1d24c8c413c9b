#![allow(dead_code)]

use async_trait::async_trait;
use mock_interview::llm::LlmError;
use mock_interview::{AppState, ReportGenerator, ReportPrompt, SessionStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const DETAILED_REPORT: &str = r#"Sure! Here is my evaluation:
{
  "overallScore": 6,
  "strengths": [{"aspect": "Approach", "evidence": "I would use a hash map", "explanation": "Right idea"}],
  "improvements": [{"issue": "No code", "evidence": "(No code written)", "suggestion": "Write it out"}],
  "transcriptMistakes": [],
  "codeAnalysis": {"correctness": "n/a", "bugs": [], "timeComplexity": "O(n)", "spaceComplexity": "O(n)", "missingEdgeCases": ["empty input"]},
  "communicationAnalysis": {"clarity": "Clear", "thinkingProcess": "Direct", "questionAsking": "None"},
  "nextSteps": ["Implement the solution"]
}
Hope this helps."#;

/// Canned completion provider that records every prompt it sees
pub struct StubGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<ReportPrompt>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Always fails as if the provider returned nothing
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err("stub".to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<ReportPrompt> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ReportGenerator for StubGenerator {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn generate_report(&self, prompt: &ReportPrompt) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(name) => Err(LlmError::EmptyCompletion(name.clone())),
        }
    }
}

pub fn app_state(generator: Arc<StubGenerator>) -> AppState {
    AppState::new(SessionStore::new(), generator, 0.3, None)
}
