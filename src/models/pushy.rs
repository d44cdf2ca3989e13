use serde::{Deserialize, Serialize};

use crate::{
    emoji::EmojiExpander,
    models::notification::{BADGE_UNSET, PushNotification},
};

/// Sender name sent for pre-loaded notifications; the device resolves the real one.
pub const ID_LOADED_SENDER_NAME: &str = "Someone";

#[derive(Debug, Clone, Serialize)]
pub struct PushyPayload {
    pub to: String,
    pub data: PushyData,
}

/// Body of a gateway push. Base fields are always sent; the rest depends on
/// the shape of the notification.
#[derive(Debug, Clone, Serialize)]
pub struct PushyData {
    pub ack_id: String,

    #[serde(rename = "type")]
    pub push_type: String,
    pub version: String,
    pub channel_id: String,
    pub is_crt_enabled: bool,
    pub server_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_id: Option<String>,

    #[serde(flatten)]
    pub content: Option<PayloadContent>,
}

impl PushyPayload {
    /// Translates a notification into the gateway body. No I/O.
    pub fn from_notification(msg: &PushNotification, expander: &dyn EmojiExpander) -> Self {
        let content = if msg.is_id_loaded {
            Some(PayloadContent::IdLoaded(IdLoadedContent {
                post_id: msg.post_id.clone(),
                message: msg.message.clone(),
                id_loaded: true,
                sender_id: msg.sender_id.clone(),
                sender_name: ID_LOADED_SENDER_NAME.to_string(),
                team_id: msg.team_id.clone(),
            }))
        } else if msg.push_type.carries_message() {
            Some(PayloadContent::Message(MessageContent {
                team_id: msg.team_id.clone(),
                sender_id: msg.sender_id.clone(),
                sender_name: msg.sender_name.clone(),
                message: expander.expand(&msg.message),
                channel_name: msg.channel_name.clone(),
                post_id: msg.post_id.clone(),
                override_username: msg.override_username.clone(),
                override_icon_url: msg.override_icon_url.clone(),
                from_webhook: msg.from_webhook.clone(),
            }))
        } else {
            None
        };

        Self {
            to: msg.device_id.clone(),
            data: PushyData {
                ack_id: msg.ack_id.clone(),
                push_type: msg.push_type.to_string(),
                version: msg.version.clone(),
                channel_id: msg.channel_id.clone(),
                is_crt_enabled: msg.is_crt_enabled,
                server_id: msg.server_id.clone(),
                badge: (msg.badge != BADGE_UNSET).then_some(msg.badge),
                root_id: (!msg.root_id.is_empty()).then(|| msg.root_id.clone()),
                content,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PayloadContent {
    IdLoaded(IdLoadedContent),
    Message(MessageContent),
}

#[derive(Debug, Clone, Serialize)]
pub struct IdLoadedContent {
    pub post_id: String,
    pub message: String,
    pub id_loaded: bool,
    pub sender_id: String,
    pub sender_name: String,
    pub team_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageContent {
    pub team_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub message: String,
    pub channel_name: String,
    pub post_id: String,
    pub override_username: String,
    pub override_icon_url: String,
    pub from_webhook: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PushyResponse {
    pub success: bool,
    pub id: String,

    #[serde(alias = "Info")]
    pub info: PushyResponseInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PushyResponseInfo {
    pub devices: i64,
}
