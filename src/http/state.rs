use crate::config::Config;
use crate::evaluation::Evaluator;
use crate::interview::InterviewManager;
use crate::livekit::LiveKitService;
use crate::llm::{build_generator, ReportGenerator};
use crate::session::SessionStore;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Session lifecycle and mutations
    pub manager: InterviewManager,

    /// Report generation over the same store
    pub evaluator: Evaluator,

    /// Media server bridge, when configured
    pub livekit: Option<Arc<LiveKitService>>,
}

impl AppState {
    pub fn new(
        store: SessionStore,
        generator: Arc<dyn ReportGenerator>,
        temperature: f64,
        livekit: Option<LiveKitService>,
    ) -> Self {
        Self {
            manager: InterviewManager::new(store.clone()),
            evaluator: Evaluator::new(store, generator, temperature),
            livekit: livekit.map(Arc::new),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let generator = build_generator(&config.llm)?;
        let livekit = config.livekit.clone().map(LiveKitService::new);

        Ok(Self::new(
            SessionStore::new(),
            generator,
            config.llm.temperature,
            livekit,
        ))
    }
}
