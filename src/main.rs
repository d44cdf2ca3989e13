use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use pushy_service::{
    api::run_api_server,
    clients::{NotificationServer, pushy::PushyNotificationServer},
    config::Config,
    metrics::NoopMetrics,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .init();

    let config = Config::load()?;
    let push_type = config.pushy.replace_for_type.clone();

    let server = PushyNotificationServer::new(config.pushy, Arc::new(NoopMetrics))?;
    if !server.initialize() {
        return Err(anyhow!("Pushy backend is not ready to receive traffic"));
    }

    info!(push_type = %push_type, "Configuration validated. Server is ready to start.");

    run_api_server(Arc::new(server), push_type, config.server_port)
        .await
        .map_err(|e| anyhow!("Push server failed: {}", e))
}
