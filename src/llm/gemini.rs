use super::generator::{LlmError, ReportGenerator, ReportPrompt};
use tracing::debug;

/// Google Gemini `generateContent` provider
pub struct GeminiGenerator {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiGenerator {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl ReportGenerator for GeminiGenerator {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    /// POST {base_url}/v1beta/models/{model}:generateContent
    async fn generate_report(&self, prompt: &ReportPrompt) -> Result<String, LlmError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model,
        );

        let body = serde_json::json!({
            "systemInstruction": {"parts": [{"text": prompt.system}]},
            "contents": [{"role": "user", "parts": [{"text": prompt.user}]}],
            "generationConfig": {
                "temperature": prompt.temperature,
                "responseMimeType": "application/json",
            }
        });

        debug!("Requesting completion from gemini ({})", self.model);

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|source| LlmError::Request {
                provider: "gemini".to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                provider: "gemini".to_string(),
                status,
                body,
            });
        }

        let json: serde_json::Value = resp.json().await.map_err(|source| LlmError::Request {
            provider: "gemini".to_string(),
            source,
        })?;

        json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .filter(|text| !text.trim().is_empty())
            .map(|text| text.to_string())
            .ok_or_else(|| LlmError::EmptyCompletion("gemini".to_string()))
    }
}
