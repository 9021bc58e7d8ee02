use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{
    AssistantMessage, GameSession, JackpotGame, Notification, PrizeDistribution, Tournament,
    DAILY_PRIZE_ALLOWANCE,
};

/// Complete state held by the store.
///
/// Snapshots are immutable once published: every command produces a fresh value, so a
/// reader holding one never observes a partially applied update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    // Jackpots
    pub jackpots: Vec<JackpotGame>,
    /// Sum of every jackpot pool, recomputed after each command.
    pub total_jackpot_pool: u64,

    // Random prizes
    pub available_prizes: Vec<PrizeDistribution>,
    pub claimed_prizes: Vec<PrizeDistribution>,
    pub daily_prizes_remaining: u32,
    pub daily_prize_allowance: u32,

    // Assistant
    /// Newest first.
    pub messages: Vec<AssistantMessage>,
    pub assistant_online: bool,
    pub assistance_requests: u32,

    // Tournaments
    pub tournaments: Vec<Tournament>,
    /// Ids of the tournaments the user is registered for.
    pub joined_tournaments: BTreeSet<String>,

    // Games
    /// Most recent game session, kept after it completes.
    pub game_session: Option<GameSession>,

    // Notifications (newest first)
    pub notifications: Vec<Notification>,
    pub next_notification_id: u64,

    // Requests
    pub in_flight: u32,
    pub error: Option<String>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::with_allowance(DAILY_PRIZE_ALLOWANCE)
    }
}

impl Snapshot {
    pub fn with_allowance(daily_prize_allowance: u32) -> Self {
        Self {
            jackpots: Vec::new(),
            total_jackpot_pool: 0,
            available_prizes: Vec::new(),
            claimed_prizes: Vec::new(),
            daily_prizes_remaining: daily_prize_allowance,
            daily_prize_allowance,
            messages: Vec::new(),
            assistant_online: true,
            assistance_requests: 0,
            tournaments: Vec::new(),
            joined_tournaments: BTreeSet::new(),
            game_session: None,
            notifications: Vec::new(),
            next_notification_id: 1,
            in_flight: 0,
            error: None,
        }
    }

    pub fn jackpot(&self, id: &str) -> Option<&JackpotGame> {
        self.jackpots.iter().find(|game| game.id == id)
    }

    pub fn prize(&self, id: &str) -> Option<&PrizeDistribution> {
        self.available_prizes
            .iter()
            .chain(self.claimed_prizes.iter())
            .find(|prize| prize.id == id)
    }

    pub fn message(&self, id: &str) -> Option<&AssistantMessage> {
        self.messages.iter().find(|message| message.id == id)
    }

    pub fn tournament(&self, id: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|tournament| tournament.id == id)
    }

    /// Tournaments the user is registered for, in listing order.
    pub fn user_tournaments(&self) -> impl Iterator<Item = &Tournament> {
        self.tournaments
            .iter()
            .filter(|tournament| self.joined_tournaments.contains(&tournament.id))
    }

    pub fn has_joined(&self, tournament_id: &str) -> bool {
        self.joined_tournaments.contains(tournament_id)
    }

    /// The game session still waiting for a score, if any.
    pub fn game_in_progress(&self) -> Option<&GameSession> {
        self.game_session.as_ref().filter(|session| session.in_progress())
    }

    pub fn active_jackpots(&self) -> impl Iterator<Item = &JackpotGame> {
        self.jackpots.iter().filter(|game| game.active)
    }

    /// Sum of all jackpot pools computed from the games themselves.
    pub fn pool_sum(&self) -> u64 {
        self.jackpots
            .iter()
            .fold(0u64, |sum, game| sum.saturating_add(game.current_pool))
    }

    pub fn unread_messages(&self) -> usize {
        self.messages.iter().filter(|message| !message.read).count()
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}
