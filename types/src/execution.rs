use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gaming::{
    AssistantMessage, GameSession, JackpotGame, NotificationKind, PrizeDistribution,
    Tournament, MAX_MESSAGE_LENGTH,
};

/// Mutations accepted by the store.
///
/// Every command is applied by a total rule: a well-formed command naming an unknown id
/// leaves the state untouched instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    // === Jackpots ===
    /// Replace the jackpot list with a freshly fetched one.
    LoadJackpots { games: Vec<JackpotGame> },

    /// Add the pool share of an entry fee and count the participant.
    EnterJackpot { game_id: String, entry_fee: u64 },

    /// Grow an active jackpot by a fixed amount (simulated feed).
    GrowJackpot { game_id: String, amount: u64 },

    /// Pay the pool out to a winner and reset it to its base prize.
    PayoutJackpot {
        game_id: String,
        winner: String,
        paid_at_ms: u64,
    },

    // === Random prizes ===
    LoadPrizes { prizes: Vec<PrizeDistribution> },

    /// Offer a newly granted prize.
    GrantPrize { prize: PrizeDistribution },

    /// Move an available prize to the claimed collection.
    ClaimPrize { prize_id: String, claimed_at_ms: u64 },

    /// Restore the daily claim allowance.
    ResetDailyPrizes,

    // === Assistant ===
    LoadMessages { messages: Vec<AssistantMessage> },

    /// Prepend the assistant's reply to a user question.
    AppendAssistantReply { message: AssistantMessage },

    MarkMessageRead { message_id: String },

    SetAssistantOnline { online: bool },

    // === Tournaments ===
    LoadTournaments { tournaments: Vec<Tournament> },

    /// Replace the set of tournaments the user is registered for.
    LoadUserTournaments { tournament_ids: Vec<String> },

    /// Register the user in a tournament that is open and has a free seat.
    JoinTournament { tournament_id: String },

    // === Game sessions ===
    /// Track a newly started game unless another is still in progress.
    StartGameSession { session: GameSession },

    /// Record the score of the game in progress.
    EndGameSession {
        session_id: String,
        score: u64,
        ended_at_ms: u64,
    },

    // === Notifications ===
    /// Prepend a notification. Without `duration_ms` it lasts its kind's default.
    Notify {
        kind: NotificationKind,
        title: String,
        message: String,
        duration_ms: Option<u64>,
        at_ms: u64,
    },

    MarkNotificationRead { id: u64 },

    DismissNotification { id: u64 },

    /// Drop notifications whose display duration has elapsed.
    ExpireNotifications { now_ms: u64 },

    ClearNotifications,

    // === Requests ===
    /// A backend call has been issued.
    RequestStarted,

    /// A backend call completed successfully.
    RequestFinished,

    /// A backend call failed; surfaced as an error notification.
    RequestFailed {
        title: String,
        message: String,
        at_ms: u64,
    },
}

/// Reasons a command is rejected before it reaches the store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{field} must not be empty")]
    EmptyId { field: &'static str },
    #[error("entry fee must be greater than zero")]
    ZeroEntryFee,
    #[error("growth amount must be greater than zero")]
    ZeroGrowth,
    #[error("message must not be blank")]
    BlankMessage,
    #[error("message is too long ({length} > {max})")]
    MessageTooLong { length: usize, max: usize },
}

fn require_id(field: &'static str, value: &str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        return Err(CommandError::EmptyId { field });
    }
    Ok(())
}

/// Validate free text submitted to the assistant.
pub fn validate_message(text: &str) -> Result<(), CommandError> {
    if text.trim().is_empty() {
        return Err(CommandError::BlankMessage);
    }
    let length = text.chars().count();
    if length > MAX_MESSAGE_LENGTH {
        return Err(CommandError::MessageTooLong {
            length,
            max: MAX_MESSAGE_LENGTH,
        });
    }
    Ok(())
}

impl Command {
    /// Check the payload is well-formed.
    ///
    /// This does not look at the state: unknown ids pass validation and become no-ops.
    pub fn validate(&self) -> Result<(), CommandError> {
        match self {
            Command::LoadJackpots { games } => {
                for game in games {
                    require_id("game_id", &game.id)?;
                }
                Ok(())
            }
            Command::EnterJackpot { game_id, entry_fee } => {
                require_id("game_id", game_id)?;
                if *entry_fee == 0 {
                    return Err(CommandError::ZeroEntryFee);
                }
                Ok(())
            }
            Command::GrowJackpot { game_id, amount } => {
                require_id("game_id", game_id)?;
                if *amount == 0 {
                    return Err(CommandError::ZeroGrowth);
                }
                Ok(())
            }
            Command::PayoutJackpot {
                game_id, winner, ..
            } => {
                require_id("game_id", game_id)?;
                require_id("winner", winner)
            }
            Command::LoadPrizes { prizes } => {
                for prize in prizes {
                    require_id("prize_id", &prize.id)?;
                }
                Ok(())
            }
            Command::GrantPrize { prize } => require_id("prize_id", &prize.id),
            Command::ClaimPrize { prize_id, .. } => require_id("prize_id", prize_id),
            Command::LoadMessages { messages } => {
                for message in messages {
                    require_id("message_id", &message.id)?;
                }
                Ok(())
            }
            Command::AppendAssistantReply { message } => require_id("message_id", &message.id),
            Command::MarkMessageRead { message_id } => require_id("message_id", message_id),
            Command::LoadTournaments { tournaments } => {
                for tournament in tournaments {
                    require_id("tournament_id", &tournament.id)?;
                }
                Ok(())
            }
            Command::LoadUserTournaments { tournament_ids } => {
                for tournament_id in tournament_ids {
                    require_id("tournament_id", tournament_id)?;
                }
                Ok(())
            }
            Command::JoinTournament { tournament_id } => {
                require_id("tournament_id", tournament_id)
            }
            Command::StartGameSession { session } => {
                require_id("session_id", &session.id)?;
                require_id("game_type", &session.game_type)
            }
            Command::EndGameSession { session_id, .. } => require_id("session_id", session_id),
            Command::Notify { title, .. } => require_id("title", title),
            Command::ResetDailyPrizes
            | Command::SetAssistantOnline { .. }
            | Command::MarkNotificationRead { .. }
            | Command::DismissNotification { .. }
            | Command::ExpireNotifications { .. }
            | Command::ClearNotifications
            | Command::RequestStarted
            | Command::RequestFinished
            | Command::RequestFailed { .. } => Ok(()),
        }
    }

    /// Short name used in logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Command::LoadJackpots { .. } => "load_jackpots",
            Command::EnterJackpot { .. } => "enter_jackpot",
            Command::GrowJackpot { .. } => "grow_jackpot",
            Command::PayoutJackpot { .. } => "payout_jackpot",
            Command::LoadPrizes { .. } => "load_prizes",
            Command::GrantPrize { .. } => "grant_prize",
            Command::ClaimPrize { .. } => "claim_prize",
            Command::ResetDailyPrizes => "reset_daily_prizes",
            Command::LoadMessages { .. } => "load_messages",
            Command::AppendAssistantReply { .. } => "append_assistant_reply",
            Command::MarkMessageRead { .. } => "mark_message_read",
            Command::SetAssistantOnline { .. } => "set_assistant_online",
            Command::LoadTournaments { .. } => "load_tournaments",
            Command::LoadUserTournaments { .. } => "load_user_tournaments",
            Command::JoinTournament { .. } => "join_tournament",
            Command::StartGameSession { .. } => "start_game_session",
            Command::EndGameSession { .. } => "end_game_session",
            Command::Notify { .. } => "notify",
            Command::MarkNotificationRead { .. } => "mark_notification_read",
            Command::DismissNotification { .. } => "dismiss_notification",
            Command::ExpireNotifications { .. } => "expire_notifications",
            Command::ClearNotifications => "clear_notifications",
            Command::RequestStarted => "request_started",
            Command::RequestFinished => "request_finished",
            Command::RequestFailed { .. } => "request_failed",
        }
    }
}

/// Observable changes produced by applying a [Command].
///
/// A command that leaves the state unchanged produces no events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    JackpotsLoaded {
        count: usize,
    },
    JackpotEntered {
        game_id: String,
        contribution: u64,
        pool: u64,
        participants: u64,
    },
    JackpotGrew {
        game_id: String,
        amount: u64,
        pool: u64,
    },
    JackpotPaidOut {
        game_id: String,
        winner: String,
        amount: u64,
    },
    PrizesLoaded {
        count: usize,
    },
    PrizeGranted {
        prize_id: String,
    },
    PrizeClaimed {
        prize_id: String,
        claimed_at_ms: u64,
        daily_prizes_remaining: u32,
    },
    DailyPrizesReset {
        remaining: u32,
    },
    MessagesLoaded {
        count: usize,
    },
    AssistantReplied {
        message_id: String,
        assistance_requests: u32,
    },
    MessageRead {
        message_id: String,
    },
    AssistantPresenceChanged {
        online: bool,
    },
    TournamentsLoaded {
        count: usize,
    },
    UserTournamentsLoaded {
        count: usize,
    },
    TournamentJoined {
        tournament_id: String,
        participants: u32,
    },
    GameSessionStarted {
        session_id: String,
        game_type: String,
    },
    GameSessionEnded {
        session_id: String,
        score: u64,
    },
    NotificationPushed {
        id: u64,
        kind: NotificationKind,
    },
    NotificationRead {
        id: u64,
    },
    NotificationsRemoved {
        ids: Vec<u64>,
    },
    RequestStarted {
        in_flight: u32,
    },
    RequestFinished {
        in_flight: u32,
    },
    RequestFailed {
        message: String,
    },
}
