use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    clients::{NotificationServer, health::HealthChecker},
    models::{health::HealthStatus, notification::PushNotification},
};

pub struct AppState {
    server: Arc<dyn NotificationServer>,
    health_checker: HealthChecker,
}

pub fn router(server: Arc<dyn NotificationServer>, push_type: String) -> Router {
    let state = Arc::new(AppState {
        health_checker: HealthChecker::new(Arc::clone(&server), push_type),
        server,
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/send_push", post(send_push))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(
    server: Arc<dyn NotificationServer>,
    push_type: String,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(server, push_type);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Push server started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all();

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

async fn send_push(
    State(state): State<Arc<AppState>>,
    Json(msg): Json<PushNotification>,
) -> impl IntoResponse {
    let response = state.server.send_notification(&msg).await;

    let status_code = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    (status_code, Json(response))
}
