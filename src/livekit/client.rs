use super::messages::{
    AccessClaims, CreateDispatchRequest, CreateRoomRequest, RoomCredentials, VideoGrant,
};
use crate::config::LiveKitConfig;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const DISPATCH_IDENTITY: &str = "dispatch-service";

#[derive(Debug, Error)]
pub enum LiveKitError {
    #[error("failed to sign access token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("media server request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("media server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub struct LiveKitService {
    config: LiveKitConfig,
    client: reqwest::Client,
}

impl LiveKitService {
    pub fn new(config: LiveKitConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// HTTP base for Twirp calls (ws → http, wss → https)
    pub fn http_url(&self) -> String {
        let url = self.config.url.trim_end_matches('/');
        if let Some(rest) = url.strip_prefix("wss://") {
            format!("https://{rest}")
        } else if let Some(rest) = url.strip_prefix("ws://") {
            format!("http://{rest}")
        } else {
            url.to_string()
        }
    }

    /// Sign a token for `identity` carrying `grant`
    pub fn create_token(
        &self,
        identity: &str,
        grant: VideoGrant,
        ttl: Duration,
    ) -> Result<String, LiveKitError> {
        let now = Utc::now().timestamp().max(0) as u64;

        let claims = AccessClaims {
            iss: self.config.api_key.clone(),
            sub: identity.to_string(),
            nbf: now,
            exp: now + ttl.as_secs(),
            video: grant,
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.api_secret.as_bytes()),
        )?;

        Ok(token)
    }

    fn admin_token(&self, room: &str) -> Result<String, LiveKitError> {
        self.create_token(
            DISPATCH_IDENTITY,
            VideoGrant::admin(room),
            Duration::from_secs(600),
        )
    }

    async fn twirp<B: Serialize>(
        &self,
        service_method: &str,
        room: &str,
        body: &B,
    ) -> Result<String, LiveKitError> {
        let url = format!("{}/twirp/livekit.{}", self.http_url(), service_method);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(self.admin_token(room)?)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(LiveKitError::Status { status, body });
        }

        Ok(body)
    }

    /// Create the room, treating "already exists" as success
    pub async fn ensure_room(&self, room: &str) -> Result<(), LiveKitError> {
        info!("Creating room: {}", room);

        let request = CreateRoomRequest {
            name: room,
            empty_timeout: self.config.empty_timeout_secs,
            max_participants: self.config.max_participants,
        };

        match self.twirp("RoomService/CreateRoom", room, &request).await {
            Ok(_) => {
                info!("Room created: {}", room);
                Ok(())
            }
            Err(LiveKitError::Status { body, .. }) if body.contains("already exists") => {
                info!("Room already exists: {}", room);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Ask the server to send the interviewer agent into `room`
    pub async fn dispatch_agent(&self, room: &str) -> Result<(), LiveKitError> {
        info!("Dispatching {} to room: {}", self.config.agent_name, room);

        let request = CreateDispatchRequest {
            room,
            agent_name: &self.config.agent_name,
        };

        self.twirp("AgentDispatchService/CreateDispatch", room, &request)
            .await?;

        info!("Agent dispatched to room: {}", room);
        Ok(())
    }

    /// Prepare the room for `session_id` and sign a candidate token
    ///
    /// Agent dispatch failure is logged and does not block the candidate.
    pub async fn issue_credentials(
        &self,
        session_id: &str,
        identity: &str,
    ) -> Result<RoomCredentials, LiveKitError> {
        self.ensure_room(session_id).await?;

        if let Err(e) = self.dispatch_agent(session_id).await {
            warn!("Agent dispatch failed for room {}: {}", session_id, e);
        }

        let token = self.create_token(
            identity,
            VideoGrant::participant(session_id),
            Duration::from_secs(self.config.token_ttl_secs),
        )?;

        Ok(RoomCredentials {
            token,
            url: self.config.url.clone(),
        })
    }
}
