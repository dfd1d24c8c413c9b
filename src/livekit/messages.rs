use serde::{Deserialize, Serialize};

/// Room permissions carried in an access token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    #[serde(default, skip_serializing_if = "is_false")]
    pub room_join: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub room_admin: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub room_create: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish_data: Option<bool>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl VideoGrant {
    /// Join, publish and subscribe in one room
    pub fn participant(room: &str) -> Self {
        Self {
            room_join: true,
            room: Some(room.to_string()),
            can_publish: Some(true),
            can_subscribe: Some(true),
            can_publish_data: Some(true),
            ..Default::default()
        }
    }

    /// Administer (and create) one room
    pub fn admin(room: &str) -> Self {
        Self {
            room_admin: true,
            room_create: true,
            room: Some(room.to_string()),
            ..Default::default()
        }
    }
}

/// JWT claims understood by the media server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// API key
    pub iss: String,
    /// Participant identity
    pub sub: String,
    pub nbf: u64,
    pub exp: u64,
    pub video: VideoGrant,
}

/// Twirp `RoomService/CreateRoom` body
#[derive(Debug, Serialize)]
pub struct CreateRoomRequest<'a> {
    pub name: &'a str,
    pub empty_timeout: u32,
    pub max_participants: u32,
}

/// Twirp `AgentDispatchService/CreateDispatch` body
#[derive(Debug, Serialize)]
pub struct CreateDispatchRequest<'a> {
    pub room: &'a str,
    pub agent_name: &'a str,
}

/// What a client needs to join a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCredentials {
    pub token: String,
    pub url: String,
}
