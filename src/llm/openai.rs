use super::generator::{LlmError, ReportGenerator, ReportPrompt};
use tracing::debug;

/// Any provider speaking the OpenAI chat-completions protocol (Groq, OpenAI)
pub struct OpenAiCompatibleGenerator {
    name: String,
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiCompatibleGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleGenerator")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiCompatibleGenerator {
    pub const GROQ_BASE_URL: &'static str = "https://api.groq.com/openai/v1";
    pub const OPENAI_BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl ReportGenerator for OpenAiCompatibleGenerator {
    fn provider_name(&self) -> &str {
        &self.name
    }

    /// POST {base_url}/chat/completions
    async fn generate_report(&self, prompt: &ReportPrompt) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user},
            ],
            "temperature": prompt.temperature,
        });

        debug!("Requesting completion from {} ({})", self.name, self.model);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| LlmError::Request {
                provider: self.name.clone(),
                source,
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                provider: self.name.clone(),
                status,
                body,
            });
        }

        let json: serde_json::Value = resp.json().await.map_err(|source| LlmError::Request {
            provider: self.name.clone(),
            source,
        })?;

        json["choices"][0]["message"]["content"]
            .as_str()
            .filter(|text| !text.trim().is_empty())
            .map(|text| text.to_string())
            .ok_or_else(|| LlmError::EmptyCompletion(self.name.clone()))
    }
}
