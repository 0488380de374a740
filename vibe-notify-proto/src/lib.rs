//! Wire contract between the notifiers and the controllers
//!
//! Both the BLE controller and the VibeKeys controller accept the same two
//! endpoints: `POST /status` with a `{"status": ..}` body and `POST /send`
//! with a `{"message": ..}` body. Neither response is read by the notifier.

/// Endpoint for status changes
pub const STATUS_PATH: &str = "/status";

/// Endpoint for free-form display messages
pub const SEND_PATH: &str = "/send";

/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Status values carried in a `/status` body
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Working,
    Stop,
    /// BLE controller's label for "needs attention"
    Waiting,
    /// VibeKeys controller's label for "needs attention"
    Pending,
}

/// A request body, one key per endpoint
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Notification {
    Status { status: Status },
    Send { message: String },
}

impl Notification {
    pub fn status(status: Status) -> Self {
        Notification::Status { status }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Notification::Send {
            message: message.into(),
        }
    }

    /// Endpoint path this body is posted to
    pub fn path(&self) -> &'static str {
        match self {
            Notification::Status { .. } => STATUS_PATH,
            Notification::Send { .. } => SEND_PATH,
        }
    }

    /// Compact JSON body, e.g. `{"status":"working"}`
    pub fn to_body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Decision values understood by the calling automation tool
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Pause and prompt the user
    Ask,
}

/// The object written to stdout, e.g. `{"permissionDecision":"ask"}`
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDecision {
    pub permission_decision: Decision,
}

impl PermissionDecision {
    pub fn ask() -> Self {
        Self {
            permission_decision: Decision::Ask,
        }
    }

    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
