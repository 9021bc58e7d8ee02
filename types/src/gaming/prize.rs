use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrizeKind {
    Cash,
    Bonus,
    FreeSpins,
    Item,
}

/// A single grantable reward tied to one user.
///
/// A prize lives in exactly one of the available or claimed collections of a
/// [super::Snapshot]; `claimed_at_ms` is set when (and only when) it moves to claimed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeDistribution {
    pub id: String,
    pub user_id: String,
    pub kind: PrizeKind,
    pub value: u64,
    pub description: String,
    /// Unix timestamp (milliseconds) after which the prize should no longer be offered
    pub expires_at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_at_ms: Option<u64>,
    pub active: bool,
}

impl PrizeDistribution {
    /// Expiry is advisory: nothing sweeps expired prizes, callers use this for display.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at_ms
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed_at_ms.is_some()
    }
}
