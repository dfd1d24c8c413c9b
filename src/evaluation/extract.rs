use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in completion")]
    NoJsonFound,

    #[error("completion JSON is invalid: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parse the span from the first `{` to the last `}` of a completion
///
/// Completions often wrap the JSON in prose or code fences. The span is
/// greedy, so a lone brace in surrounding prose or a truncated completion
/// makes the parse fail rather than guess.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoJsonFound)?;
    let end = text.rfind('}').ok_or(ExtractError::NoJsonFound)?;
    if end < start {
        return Err(ExtractError::NoJsonFound);
    }

    Ok(serde_json::from_str(&text[start..=end])?)
}
