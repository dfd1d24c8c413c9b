use super::{GeminiGenerator, OpenAiCompatibleGenerator};
use crate::config::LlmConfig;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{provider} request failed: {source}")]
    Request {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned {status}: {body}")]
    Status {
        provider: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{0} returned no text")]
    EmptyCompletion(String),

    #[error("LLM configuration error: {0}")]
    Config(String),
}

/// Everything a provider needs to produce one evaluation completion
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPrompt {
    pub system: String,
    pub user: String,
    pub temperature: f64,
}

/// A text-completion backend used to produce evaluation reports
#[async_trait::async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Short provider name for logs
    fn provider_name(&self) -> &str;

    /// Return the raw completion text for `prompt`
    ///
    /// Empty completions are an error.
    async fn generate_report(&self, prompt: &ReportPrompt) -> Result<String, LlmError>;
}

/// Build the configured provider
pub fn build_generator(config: &LlmConfig) -> Result<Arc<dyn ReportGenerator>, LlmError> {
    let generator: Arc<dyn ReportGenerator> = match config.provider.as_str() {
        "groq" => Arc::new(OpenAiCompatibleGenerator::new(
            "groq",
            config
                .base_url
                .as_deref()
                .unwrap_or(OpenAiCompatibleGenerator::GROQ_BASE_URL),
            resolve_api_key(config, "GROQ_API_KEY")?,
            config.model.as_deref().unwrap_or("llama-3.1-8b-instant"),
        )),
        "openai" => Arc::new(OpenAiCompatibleGenerator::new(
            "openai",
            config
                .base_url
                .as_deref()
                .unwrap_or(OpenAiCompatibleGenerator::OPENAI_BASE_URL),
            resolve_api_key(config, "OPENAI_API_KEY")?,
            config.model.as_deref().unwrap_or("gpt-4o-mini"),
        )),
        "gemini" => Arc::new(GeminiGenerator::new(
            config
                .base_url
                .as_deref()
                .unwrap_or(GeminiGenerator::DEFAULT_BASE_URL),
            resolve_api_key(config, "GEMINI_API_KEY")?,
            config.model.as_deref().unwrap_or("gemini-1.5-flash"),
        )),
        other => {
            return Err(LlmError::Config(format!(
                "unknown LLM provider: '{other}' (expected 'groq', 'openai', or 'gemini')"
            )));
        }
    };

    info!("Using LLM provider: {}", generator.provider_name());
    Ok(generator)
}

/// Resolve an API key from config, a custom env var, or a default env var
fn resolve_api_key(config: &LlmConfig, default_env_var: &str) -> Result<String, LlmError> {
    if let Some(key) = config.api_key.as_deref() {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    let env_var_name = config.env_var.as_deref().unwrap_or(default_env_var);

    std::env::var(env_var_name).map_err(|_| {
        LlmError::Config(format!(
            "{} provider requires an API key (set llm.api_key or {})",
            config.provider, env_var_name
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> LlmConfig {
        LlmConfig {
            provider: provider.to_string(),
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_known_providers() {
        assert_eq!(build_generator(&config("groq")).unwrap().provider_name(), "groq");
        assert_eq!(build_generator(&config("openai")).unwrap().provider_name(), "openai");
        assert_eq!(build_generator(&config("gemini")).unwrap().provider_name(), "gemini");
    }

    #[test]
    fn test_build_unknown_provider() {
        let err = build_generator(&config("banana")).err().unwrap();
        assert!(err.to_string().contains("unknown LLM provider"));
    }

    #[test]
    fn test_missing_api_key() {
        let config = LlmConfig {
            provider: "groq".to_string(),
            api_key: None,
            env_var: Some("MOCK_INTERVIEW_TEST_UNSET_KEY".to_string()),
            ..Default::default()
        };
        let err = build_generator(&config).err().unwrap();
        assert!(err.to_string().contains("MOCK_INTERVIEW_TEST_UNSET_KEY"));
    }
}
