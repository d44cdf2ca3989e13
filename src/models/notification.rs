use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

pub const BADGE_UNSET: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PushType {
    Message,
    Session,
    Clear,
    UpdateBadge,
    Test,
    Other(String),
}

impl PushType {
    pub fn as_str(&self) -> &str {
        match self {
            PushType::Message => "message",
            PushType::Session => "session",
            PushType::Clear => "clear",
            PushType::UpdateBadge => "update_badge",
            PushType::Test => "test",
            PushType::Other(other) => other,
        }
    }

    /// Types that carry a full message body to render on the device.
    pub fn carries_message(&self) -> bool {
        matches!(self, PushType::Message | PushType::Session)
    }
}

impl Default for PushType {
    fn default() -> Self {
        PushType::Other(String::new())
    }
}

impl From<String> for PushType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "message" => PushType::Message,
            "session" => PushType::Session,
            "clear" => PushType::Clear,
            "update_badge" => PushType::UpdateBadge,
            "test" => PushType::Test,
            _ => PushType::Other(value),
        }
    }
}

impl From<PushType> for String {
    fn from(value: PushType) -> Self {
        match value {
            PushType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for PushType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PushNotification {
    pub id: String,
    pub ack_id: String,
    pub platform: String,
    pub server_id: String,
    pub device_id: String,
    pub post_id: String,
    pub category: String,
    pub sound: String,
    pub message: String,
    pub badge: i32,

    #[serde(rename = "cont_ava")]
    pub content_available: i32,
    pub team_id: String,
    pub channel_id: String,
    pub root_id: String,
    pub channel_name: String,

    #[serde(rename = "type")]
    pub push_type: PushType,
    pub sender_id: String,
    pub sender_name: String,
    pub override_username: String,
    pub override_icon_url: String,
    pub from_webhook: String,
    pub version: String,
    pub is_crt_enabled: bool,
    pub is_id_loaded: bool,
}

impl Default for PushNotification {
    fn default() -> Self {
        Self {
            id: String::new(),
            ack_id: String::new(),
            platform: String::new(),
            server_id: String::new(),
            device_id: String::new(),
            post_id: String::new(),
            category: String::new(),
            sound: String::new(),
            message: String::new(),
            badge: BADGE_UNSET,
            content_available: 0,
            team_id: String::new(),
            channel_id: String::new(),
            root_id: String::new(),
            channel_name: String::new(),
            push_type: PushType::default(),
            sender_id: String::new(),
            sender_name: String::new(),
            override_username: String::new(),
            override_icon_url: String::new(),
            from_webhook: String::new(),
            version: String::new(),
            is_crt_enabled: false,
            is_id_loaded: false,
        }
    }
}
