//! LLM providers that turn an evaluation prompt into raw completion text
//!
//! Providers implement [`ReportGenerator`]; the evaluation pipeline never
//! sees provider-specific request or response shapes.

mod gemini;
mod generator;
mod openai;

pub use gemini::GeminiGenerator;
pub use generator::{build_generator, LlmError, ReportGenerator, ReportPrompt};
pub use openai::OpenAiCompatibleGenerator;
