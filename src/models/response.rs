use serde::{Deserialize, Serialize};

pub const PUSH_STATUS_OK: &str = "OK";
pub const PUSH_STATUS_FAIL: &str = "FAIL";

/// Outcome handed back to the caller of a notification backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushResponse {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PushResponse {
    pub fn ok() -> Self {
        Self {
            status: PUSH_STATUS_OK.to_string(),
            error: None,
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            status: PUSH_STATUS_FAIL.to_string(),
            error: Some(reason.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == PUSH_STATUS_OK
    }
}
