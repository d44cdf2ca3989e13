use pushy_service::{
    config::PushySettings,
    models::notification::{PushNotification, PushType},
};
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret";

pub fn enabled_settings(api_url: String) -> PushySettings {
    PushySettings {
        enable: true,
        secret_api_key: TEST_SECRET.to_string(),
        api_url,
        ..Default::default()
    }
}

pub fn create_notification(push_type: PushType) -> PushNotification {
    PushNotification {
        id: Uuid::new_v4().to_string(),
        ack_id: format!("ack_{}", Uuid::new_v4()),
        platform: "android_rn".to_string(),
        server_id: "server_abc".to_string(),
        device_id: "pushy_device_token_0123456789".to_string(),
        post_id: "post_123".to_string(),
        message: "Hello :rocket:".to_string(),
        team_id: "team_42".to_string(),
        channel_id: "channel_7".to_string(),
        channel_name: "town-square".to_string(),
        push_type,
        sender_id: "user_1".to_string(),
        sender_name: "alice".to_string(),
        override_username: "bot".to_string(),
        override_icon_url: "https://example.com/icon.png".to_string(),
        from_webhook: "true".to_string(),
        version: "v2".to_string(),
        is_crt_enabled: true,
        ..Default::default()
    }
}
