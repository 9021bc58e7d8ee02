//! Scripted user actions replayed against a [Session].

use crate::session::{Session, SessionError};
use commonware_runtime::Clock;
use gamehub_simulator::Backend;
use gamehub_types::Event;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Load,
    EnterJackpot { game_id: String, entry_fee: u64 },
    ClaimPrize { prize_id: String },
    DrawPrize,
    SendMessage { text: String },
    OpenMessage { message_id: String },
    JoinTournament { tournament_id: String },
    StartGame { game_type: String },
    EndGame { score: u64 },
    DismissNotification { id: u64 },
    Wait { ms: u64 },
}

impl Action {
    pub async fn run<E: Clock, B: Backend>(
        &self,
        context: &E,
        session: &Session<E, B>,
    ) -> Result<Vec<Event>, SessionError> {
        match self {
            Action::Load => session.load().await.map(|_| Vec::new()),
            Action::EnterJackpot { game_id, entry_fee } => {
                session.enter_jackpot(game_id, *entry_fee).await
            }
            Action::ClaimPrize { prize_id } => session.claim_prize(prize_id).await,
            Action::DrawPrize => session.draw_prize().await,
            Action::SendMessage { text } => session.send_message(text).await,
            Action::OpenMessage { message_id } => session.open_message(message_id).await,
            Action::JoinTournament { tournament_id } => {
                session.join_tournament(tournament_id).await
            }
            Action::StartGame { game_type } => session.start_game(game_type).await,
            Action::EndGame { score } => session.end_game(*score).await,
            Action::DismissNotification { id } => session.dismiss_notification(*id).await,
            Action::Wait { ms } => {
                context.sleep(Duration::from_millis(*ms)).await;
                Ok(Vec::new())
            }
        }
    }
}

/// Run every action in order, logging failures without stopping.
///
/// Returns the number of actions that failed.
pub async fn run<E: Clock, B: Backend>(
    context: &E,
    session: &Session<E, B>,
    actions: &[Action],
) -> usize {
    let mut failed = 0;
    for (index, action) in actions.iter().enumerate() {
        match action.run(context, session).await {
            Ok(events) => info!(index, ?action, events = events.len(), "action completed"),
            Err(e) => {
                failed += 1;
                warn!(index, ?action, error = %e, "action failed");
            }
        }
    }
    failed
}
