use serde::{Deserialize, Serialize};

use super::JACKPOT_CONTRIBUTION_PERCENT;

/// Payout tier of a progressive jackpot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JackpotTier {
    Mega,
    Major,
    Minor,
}

impl JackpotTier {
    /// Accent color used when the tier is rendered.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Mega => "#ff4d4f",
            Self::Major => "#faad14",
            Self::Minor => "#52c41a",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mega => "MEGA",
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
        }
    }
}

/// A progressive jackpot game.
///
/// `current_pool` never drops below `base_prize`: entries and growth only add to it,
/// and a payout resets it to exactly the base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JackpotGame {
    pub id: String,
    pub name: String,
    pub current_pool: u64,
    pub base_prize: u64,
    pub participants: u64,
    pub tier: JackpotTier,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_winner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_win_amount: Option<u64>,
    /// Unix timestamp (milliseconds) of the last payout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_win_ms: Option<u64>,
}

impl JackpotGame {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tier: JackpotTier,
        base_prize: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_pool: base_prize,
            base_prize,
            participants: 0,
            tier,
            active: true,
            last_winner: None,
            last_win_amount: None,
            last_win_ms: None,
        }
    }

    /// Amount of an entry fee that flows into the pool (rounded down).
    pub fn contribution(entry_fee: u64) -> u64 {
        // The share never exceeds the fee, so the narrowing cast is exact
        (entry_fee as u128 * JACKPOT_CONTRIBUTION_PERCENT as u128 / 100) as u64
    }

    /// Amount the pool has grown past its floor.
    pub fn accrued(&self) -> u64 {
        self.current_pool.saturating_sub(self.base_prize)
    }
}

/// Parameters of a jackpot entry as sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JackpotEntry {
    pub game_id: String,
    pub entry_fee: u64,
}
