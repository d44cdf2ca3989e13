use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    clients::NotificationServer,
    models::health::{HealthCheckResponse, HealthStatus, ServiceHealth},
};

pub struct HealthChecker {
    server: Arc<dyn NotificationServer>,
    push_type: String,
}

impl HealthChecker {
    pub fn new(server: Arc<dyn NotificationServer>, push_type: String) -> Self {
        Self { server, push_type }
    }

    pub fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();
        checks.insert("pushy".to_string(), self.check_pushy());

        let status = if checks
            .values()
            .any(|health| health.status == HealthStatus::Unhealthy)
        {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Healthy
        };

        HealthCheckResponse {
            status,
            timestamp: Utc::now(),
            checks,
        }
    }

    fn check_pushy(&self) -> ServiceHealth {
        if self.server.initialize() {
            debug!(push_type = %self.push_type, "Pushy readiness check passed");
            ServiceHealth::healthy().with_push_type(self.push_type.clone())
        } else {
            warn!(push_type = %self.push_type, "Pushy readiness check failed");
            ServiceHealth::unhealthy("Missing Pushy API secret".to_string())
                .with_push_type(self.push_type.clone())
        }
    }
}
