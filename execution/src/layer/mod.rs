use gamehub_types::{gaming::Snapshot, Command, Event};
use tracing::debug;

mod handlers;

/// Pending changes to a [Snapshot].
///
/// A layer starts as a copy of the current snapshot, absorbs commands one at a time,
/// and hands back the next snapshot on [Layer::commit]. The snapshot it was built from
/// is never touched.
pub struct Layer {
    pending: Snapshot,
}

impl Layer {
    pub fn new(state: &Snapshot) -> Self {
        Self {
            pending: state.clone(),
        }
    }

    /// Current (uncommitted) view of the state.
    pub fn view(&self) -> &Snapshot {
        &self.pending
    }

    pub fn apply(&mut self, command: Command) -> Vec<Event> {
        let name = command.name();
        let events = match command {
            // Jackpots
            Command::LoadJackpots { games } => self.handle_load_jackpots(games),
            Command::EnterJackpot { game_id, entry_fee } => {
                self.handle_enter_jackpot(&game_id, entry_fee)
            }
            Command::GrowJackpot { game_id, amount } => self.handle_grow_jackpot(&game_id, amount),
            Command::PayoutJackpot {
                game_id,
                winner,
                paid_at_ms,
            } => self.handle_payout_jackpot(&game_id, winner, paid_at_ms),

            // Random prizes
            Command::LoadPrizes { prizes } => self.handle_load_prizes(prizes),
            Command::GrantPrize { prize } => self.handle_grant_prize(prize),
            Command::ClaimPrize {
                prize_id,
                claimed_at_ms,
            } => self.handle_claim_prize(&prize_id, claimed_at_ms),
            Command::ResetDailyPrizes => self.handle_reset_daily_prizes(),

            // Assistant
            Command::LoadMessages { messages } => self.handle_load_messages(messages),
            Command::AppendAssistantReply { message } => self.handle_assistant_reply(message),
            Command::MarkMessageRead { message_id } => self.handle_mark_message_read(&message_id),
            Command::SetAssistantOnline { online } => self.handle_set_assistant_online(online),

            // Tournaments
            Command::LoadTournaments { tournaments } => self.handle_load_tournaments(tournaments),
            Command::LoadUserTournaments { tournament_ids } => {
                self.handle_load_user_tournaments(tournament_ids)
            }
            Command::JoinTournament { tournament_id } => {
                self.handle_join_tournament(&tournament_id)
            }

            // Game sessions
            Command::StartGameSession { session } => self.handle_start_game_session(session),
            Command::EndGameSession {
                session_id,
                score,
                ended_at_ms,
            } => self.handle_end_game_session(&session_id, score, ended_at_ms),

            // Notifications
            Command::Notify {
                kind,
                title,
                message,
                duration_ms,
                at_ms,
            } => vec![self.push_notification(kind, title, message, duration_ms, at_ms)],
            Command::MarkNotificationRead { id } => self.handle_mark_notification_read(id),
            Command::DismissNotification { id } => self.handle_dismiss_notification(id),
            Command::ExpireNotifications { now_ms } => self.handle_expire_notifications(now_ms),
            Command::ClearNotifications => self.handle_clear_notifications(),

            // Requests
            Command::RequestStarted => self.handle_request_started(),
            Command::RequestFinished => self.handle_request_finished(),
            Command::RequestFailed {
                title,
                message,
                at_ms,
            } => self.handle_request_failed(title, message, at_ms),
        };
        if events.is_empty() {
            debug!(command = name, "command left state unchanged");
        }
        events
    }

    pub fn commit(mut self) -> Snapshot {
        self.pending.total_jackpot_pool = self.pending.pool_sum();
        self.pending
    }
}
