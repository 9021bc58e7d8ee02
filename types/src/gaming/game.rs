use serde::{Deserialize, Serialize};

/// A single play of a game, from start until a score is recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: String,
    pub user_id: String,
    pub game_type: String,
    pub started_at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
    pub completed: bool,
}

impl GameSession {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        game_type: impl Into<String>,
        started_at_ms: u64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            game_type: game_type.into(),
            started_at_ms,
            ended_at_ms: None,
            score: None,
            completed: false,
        }
    }

    pub fn in_progress(&self) -> bool {
        !self.completed
    }

    /// Record the final score.
    pub fn complete(&mut self, score: u64, ended_at_ms: u64) {
        self.score = Some(score);
        self.ended_at_ms = Some(ended_at_ms);
        self.completed = true;
    }
}
