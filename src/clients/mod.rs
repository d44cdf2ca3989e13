use async_trait::async_trait;

use crate::models::{notification::PushNotification, response::PushResponse};

pub mod health;
pub mod pushy;

/// Contract shared by every gateway-specific push backend.
#[async_trait]
pub trait NotificationServer: Send + Sync {
    /// Whether this backend may receive traffic. Not a network check.
    fn initialize(&self) -> bool;

    async fn send_notification(&self, msg: &PushNotification) -> PushResponse;
}
