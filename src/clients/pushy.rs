use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use thiserror::Error;
use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::{
    clients::NotificationServer,
    config::PushySettings,
    emoji::{EmojiExpander, ShortcodeExpander},
    metrics::PushMetrics,
    models::{
        notification::PushNotification,
        pushy::{PushyPayload, PushyResponse},
        response::PushResponse,
        retry::RetryConfig,
    },
    utils::retry_with_backoff,
};

pub const FAILED_TO_ENCODE: &str = "failed to encode";
pub const FAILED_TO_SEND: &str = "failed to send";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const TCP_KEEPALIVE: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("gateway rejected push (status={status}, id={id:?})")]
    Rejected { status: u16, id: String },

    #[error("all {attempts} attempt(s) used, error remains")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<SendError>,
    },
}

/// Push backend for the Pushy gateway. Holds one pooled HTTP client for its
/// whole lifetime; safe to share across tasks.
pub struct PushyNotificationServer {
    settings: PushySettings,
    http_client: Client,
    retry_config: RetryConfig,
    metrics: Arc<dyn PushMetrics>,
    emoji: Arc<dyn EmojiExpander>,
}

impl PushyNotificationServer {
    pub fn new(settings: PushySettings, metrics: Arc<dyn PushMetrics>) -> Result<Self, SendError> {
        let http_client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .tcp_keepalive(TCP_KEEPALIVE)
            .pool_max_idle_per_host(settings.max_conns)
            .pool_idle_timeout(Duration::from_secs(settings.idle_conn_timeout))
            .build()
            .map_err(SendError::Client)?;

        debug!(
            replace_for_type = %settings.replace_for_type,
            max_conns = settings.max_conns,
            idle_conn_timeout = settings.idle_conn_timeout,
            "Pushy HTTP client pool created"
        );

        Ok(Self {
            retry_config: settings.retry_config(),
            settings,
            http_client,
            metrics,
            emoji: Arc::new(ShortcodeExpander),
        })
    }

    pub fn with_emoji_expander(mut self, emoji: Arc<dyn EmojiExpander>) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn build_payload(&self, msg: &PushNotification) -> PushyPayload {
        PushyPayload::from_notification(msg, self.emoji.as_ref())
    }

    /// Posts an encoded payload until the gateway reports success or the
    /// configured attempts run out. Attempts are strictly sequential and log
    /// inside the caller's span.
    pub async fn send_with_retry(&self, body: &[u8]) -> Result<PushyResponse, SendError> {
        retry_with_backoff(&self.retry_config, |attempt| self.send_once(attempt, body))
            .await
            .map_err(|last| SendError::RetriesExhausted {
                attempts: self.retry_config.max_attempts.max(1),
                last: Box::new(last),
            })
    }

    async fn send_once(&self, attempt: u32, body: &[u8]) -> Result<PushyResponse, SendError> {
        let response = self
            .http_client
            .post(&self.settings.api_url)
            .query(&[("api_key", self.settings.secret_api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key.
                let e = e.without_url();
                error!(attempt, error = %e, "Failed to send to pushy");
                SendError::Transport(e)
            })?;

        let status = response.status().as_u16();
        let raw = response.bytes().await.unwrap_or_default();
        let parsed = serde_json::from_slice::<PushyResponse>(&raw).unwrap_or_default();

        if !parsed.success {
            warn!(attempt, status, "Failed to send to pushy (by response)");
            return Err(SendError::Rejected {
                status,
                id: parsed.id,
            });
        }

        debug!(
            attempt,
            pushy_id = %parsed.id,
            devices = parsed.info.devices,
            "Pushy accepted push"
        );
        Ok(parsed)
    }
}

#[async_trait]
impl NotificationServer for PushyNotificationServer {
    fn initialize(&self) -> bool {
        info!(
            replace_for_type = %self.settings.replace_for_type,
            "Initializing Pushy notification server"
        );

        if self.settings.enable && self.settings.secret_api_key.is_empty() {
            error!("Pushy push notifications not configured. Missing SecretAPIKey.");
            return false;
        }

        true
    }

    async fn send_notification(&self, msg: &PushNotification) -> PushResponse {
        if !self.settings.enable {
            return PushResponse::ok();
        }

        let push_type = msg.push_type.as_str();
        let payload = self.build_payload(msg);

        let body = match serde_json::to_vec(&payload) {
            Ok(body) => body,
            Err(e) => {
                error!(
                    ack_id = %msg.ack_id,
                    push_type,
                    error = %SendError::from(e),
                    "Failed to convert to json"
                );
                self.metrics.record_failure(push_type, FAILED_TO_ENCODE);
                return PushResponse::error(FAILED_TO_ENCODE);
            }
        };

        info!(
            replace_for_type = %self.settings.replace_for_type,
            device_id = %msg.device_id,
            push_type,
            ack_id = %msg.ack_id,
            "Sending pushy push notification"
        );

        let span = info_span!(
            "pushy_send",
            ack_id = %msg.ack_id,
            push_type,
            device_id = %msg.device_id
        );

        match self.send_with_retry(&body).instrument(span).await {
            Ok(_) => {
                self.metrics.record_sent(push_type);
                PushResponse::ok()
            }
            Err(e) => {
                error!(
                    ack_id = %msg.ack_id,
                    push_type,
                    error = %e,
                    "Failed to send to pushy"
                );
                self.metrics.record_failure(push_type, FAILED_TO_SEND);
                PushResponse::error(FAILED_TO_SEND)
            }
        }
    }
}
