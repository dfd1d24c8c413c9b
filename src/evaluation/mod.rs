//! Evaluation pipeline
//!
//! participation check → prompt → LLM → JSON extraction → normalization →
//! session deletion.

mod extract;
mod participation;
mod pipeline;
mod prompt;
mod report;

pub use extract::{extract_json, ExtractError};
pub use participation::{has_meaningful_answers, has_meaningful_code, has_participation};
pub use pipeline::{EvaluationInput, Evaluator};
pub use prompt::{build_prompt, render_transcript, SYSTEM_PROMPT};
pub use report::{
    normalize, CodeAnalysis, CodeBug, CommunicationAnalysis, EvaluationReport, Improvement,
    Strength, TranscriptMistake,
};
