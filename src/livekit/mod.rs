//! Real-time media server bridge: access tokens, room creation and
//! interviewer agent dispatch over the server's Twirp API

pub mod client;
pub mod messages;

pub use client::{LiveKitError, LiveKitService};
pub use messages::{AccessClaims, RoomCredentials, VideoGrant};
