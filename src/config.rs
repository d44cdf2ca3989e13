use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::models::retry::RetryConfig;

pub const DEFAULT_PUSHY_API_URL: &str = "https://api.pushy.me/push";

/// Settings of one Pushy backend instance. Read once at startup.
#[derive(Clone, Deserialize, Debug)]
pub struct PushySettings {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub secret_api_key: String,
    #[serde(default = "default_max_conns")]
    pub max_conns: usize,
    #[serde(default = "default_idle_conn_timeout")]
    pub idle_conn_timeout: u64,
    #[serde(default = "default_replace_for_type")]
    pub replace_for_type: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default)]
    pub retry_delay_ms: u64,
    #[serde(default)]
    pub max_retry_delay_ms: u64,
    #[serde(default = "default_backoff_multiplier")]
    pub retry_backoff_multiplier: u64,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub pushy: PushySettings,
    pub server_port: u16,
}

#[derive(Deserialize)]
struct ServerSettings {
    #[serde(default = "default_server_port")]
    server_port: u16,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let pushy = envy::prefixed("PUSHY_")
            .from_env::<PushySettings>()
            .map_err(|e| anyhow!("Invalid PUSHY_* environmental variable: {}", e))?;
        let server = envy::from_env::<ServerSettings>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;

        Ok(Self {
            pushy,
            server_port: server.server_port,
        })
    }
}

impl PushySettings {
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts,
            initial_delay_ms: self.retry_delay_ms,
            max_delay_ms: self.max_retry_delay_ms.max(self.retry_delay_ms),
            backoff_multiplier: self.retry_backoff_multiplier,
        }
    }
}

impl Default for PushySettings {
    fn default() -> Self {
        Self {
            enable: false,
            secret_api_key: String::new(),
            max_conns: default_max_conns(),
            idle_conn_timeout: default_idle_conn_timeout(),
            replace_for_type: default_replace_for_type(),
            api_url: default_api_url(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: 0,
            max_retry_delay_ms: 0,
            retry_backoff_multiplier: default_backoff_multiplier(),
        }
    }
}

fn default_max_conns() -> usize {
    100
}

fn default_idle_conn_timeout() -> u64 {
    90
}

fn default_replace_for_type() -> String {
    "android_rn".to_string()
}

fn default_api_url() -> String {
    DEFAULT_PUSHY_API_URL.to_string()
}

// One real attempt per notification, matching the historical "retry bound 2".
fn default_max_attempts() -> u32 {
    1
}

fn default_backoff_multiplier() -> u64 {
    2
}

fn default_server_port() -> u16 {
    8066
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_make_a_single_attempt() {
        let retry = PushySettings::default().retry_config();
        assert_eq!(retry.max_attempts, 1);
        assert_eq!(retry.initial_delay_ms, 0);
    }

    #[test]
    fn retry_delay_cap_never_below_initial_delay() {
        let settings = PushySettings {
            retry_delay_ms: 250,
            ..Default::default()
        };
        assert_eq!(settings.retry_config().max_delay_ms, 250);
    }
}
