use serde::{Deserialize, Serialize};

/// Tournament lifecycle phases
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    Registration,
    Active,
    InProgress,
    Completed,
    Cancelled,
}

/// Tournament listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub game_type: String,
    /// Unix timestamp (milliseconds) when the tournament starts
    pub start_ms: u64,
    /// Unix timestamp (milliseconds) when the tournament ends
    pub end_ms: u64,
    pub max_participants: u32,
    pub current_participants: u32,
    pub prize_pool: u64,
    pub entry_fee: u64,
    pub status: TournamentStatus,
    pub description: String,
    #[serde(default)]
    pub rules: Vec<String>,
    pub organizer_id: String,
}

impl Tournament {
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }

    pub fn is_registering(&self) -> bool {
        self.status == TournamentStatus::Registration
    }

    /// Seats left before the tournament is full.
    pub fn open_seats(&self) -> u32 {
        self.max_participants.saturating_sub(self.current_participants)
    }
}
