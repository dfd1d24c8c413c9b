use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub llm: LlmConfig,
    /// Media server bridge; token issuance is disabled without it
    #[serde(default)]
    pub livekit: Option<LiveKitConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// Prefix all API routes are nested under
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Browser origins allowed by CORS
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_base_path() -> String {
    "/api".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// "groq", "openai" or "gemini"
    pub provider: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Env var to read the key from instead of the provider default
    #[serde(default)]
    pub env_var: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_temperature() -> f64 {
    0.3
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: None,
            base_url: None,
            api_key: None,
            env_var: None,
            temperature: default_temperature(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveKitConfig {
    /// wss:// endpoint handed to clients
    pub url: String,
    pub api_key: String,
    pub api_secret: String,
    #[serde(default = "default_agent_name")]
    pub agent_name: String,
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
    #[serde(default = "default_empty_timeout_secs")]
    pub empty_timeout_secs: u32,
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
}

fn default_agent_name() -> String {
    "interviewer-agent".to_string()
}

fn default_token_ttl_secs() -> u64 {
    3600
}

fn default_empty_timeout_secs() -> u32 {
    300
}

fn default_max_participants() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `path` (extension optional), then `MOCK_INTERVIEW__*` env overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix("MOCK_INTERVIEW")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
