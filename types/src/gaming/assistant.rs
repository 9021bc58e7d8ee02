use serde::{Deserialize, Serialize};

/// Cosmetic tag attached to an assistant message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Welcome,
    Tip,
    Warning,
    Congratulations,
    Assistance,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    pub id: String,
    pub user_id: String,
    pub body: String,
    pub kind: MessageKind,
    pub timestamp_ms: u64,
    pub read: bool,
}

/// A question submitted to the assistant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistanceRequest {
    pub user_id: String,
    pub message: String,
}
