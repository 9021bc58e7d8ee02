use serde::{Deserialize, Serialize};

use super::{
    ERROR_NOTIFICATION_MS, INFO_NOTIFICATION_MS, SUCCESS_NOTIFICATION_MS,
    WARNING_NOTIFICATION_MS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// How long a notification of this kind stays visible unless a duration is given.
    pub fn default_duration_ms(&self) -> u64 {
        match self {
            Self::Success => SUCCESS_NOTIFICATION_MS,
            Self::Error => ERROR_NOTIFICATION_MS,
            Self::Warning => WARNING_NOTIFICATION_MS,
            Self::Info => INFO_NOTIFICATION_MS,
        }
    }
}

/// A transient, dismissable message surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Display time. The store fills in the kind's default when a `Notify` command
    /// gives none, so only records built outside the store can be sticky (`None`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    pub read: bool,
    pub created_at_ms: u64,
}

impl Notification {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        match self.duration_ms {
            Some(duration) => now_ms >= self.created_at_ms.saturating_add(duration),
            None => false,
        }
    }
}
