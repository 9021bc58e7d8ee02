//! User-facing operations.
//!
//! A [Session] turns each user action into store commands around a backend call: the
//! request is marked in flight, the backend answers (after its latency), and the result
//! is applied in a single update. Backend failures, and backend results the store
//! rejects as malformed, are surfaced as error notifications and returned to the caller.

use crate::store::{self, MailboxError};
use commonware_runtime::Clock;
use gamehub_simulator::{Backend, Error as BackendError};
use gamehub_types::{
    gaming::{AssistanceRequest, JackpotEntry, NotificationKind},
    system_time_ms, validate_message, Command, CommandError, Event,
};
use std::future::Future;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid request: {0}")]
    Invalid(#[from] CommandError),
    #[error("assistant is offline")]
    AssistantOffline,
    #[error("a game is already in progress")]
    GameInProgress,
    #[error("no game in progress")]
    NoGameInProgress,
    #[error("backend returned a malformed result: {0}")]
    Malformed(CommandError),
    #[error("backend request failed: {0}")]
    Backend(#[from] BackendError),
    #[error("store unavailable: {0}")]
    Store(#[from] MailboxError),
}

#[derive(Clone)]
pub struct Session<E: Clock, B: Backend> {
    context: E,
    backend: B,
    store: store::Mailbox,
    user_id: String,
}

impl<E: Clock, B: Backend> Session<E, B> {
    pub fn new(context: E, backend: B, store: store::Mailbox, user_id: impl Into<String>) -> Self {
        Self {
            context,
            backend,
            store,
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Fetch everything the hub shows, concurrently.
    pub async fn load(&self) -> Result<(), SessionError> {
        let (jackpots, prizes, messages, tournaments, joined) = futures::join!(
            self.fetch_jackpots(),
            self.fetch_prizes(),
            self.fetch_messages(),
            self.fetch_tournaments(),
            self.fetch_user_tournaments(),
        );
        jackpots?;
        prizes?;
        messages?;
        tournaments?;
        joined?;
        Ok(())
    }

    pub async fn fetch_jackpots(&self) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to fetch jackpot games";
        let games = self.dispatch(FAILURE, self.backend.fetch_jackpots()).await?;
        self.finish(FAILURE, vec![Command::LoadJackpots { games }]).await
    }

    pub async fn fetch_prizes(&self) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to fetch prizes";
        let prizes = self
            .dispatch(FAILURE, self.backend.fetch_prizes(&self.user_id))
            .await?;
        self.finish(FAILURE, vec![Command::LoadPrizes { prizes }]).await
    }

    pub async fn fetch_messages(&self) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to fetch messages";
        let messages = self
            .dispatch(FAILURE, self.backend.fetch_messages(&self.user_id))
            .await?;
        self.finish(FAILURE, vec![Command::LoadMessages { messages }]).await
    }

    pub async fn fetch_tournaments(&self) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to fetch tournaments";
        let tournaments = self
            .dispatch(FAILURE, self.backend.fetch_tournaments())
            .await?;
        self.finish(FAILURE, vec![Command::LoadTournaments { tournaments }]).await
    }

    /// Fetch which tournaments the user is registered for.
    pub async fn fetch_user_tournaments(&self) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to fetch your tournaments";
        let tournament_ids = self
            .dispatch(FAILURE, self.backend.fetch_user_tournaments(&self.user_id))
            .await?;
        self.finish(FAILURE, vec![Command::LoadUserTournaments { tournament_ids }]).await
    }

    pub async fn enter_jackpot(
        &self,
        game_id: &str,
        entry_fee: u64,
    ) -> Result<Vec<Event>, SessionError> {
        Command::EnterJackpot {
            game_id: game_id.to_string(),
            entry_fee,
        }
        .validate()?;
        let entry = JackpotEntry {
            game_id: game_id.to_string(),
            entry_fee,
        };
        const FAILURE: &str = "Failed to enter jackpot game";
        let entry = self
            .dispatch(FAILURE, self.backend.enter_jackpot(entry))
            .await?;
        let mut events = self
            .finish(
                FAILURE,
                vec![Command::EnterJackpot {
                    game_id: entry.game_id,
                    entry_fee: entry.entry_fee,
                }],
            )
            .await?;

        // Unknown or inactive games take no entry, so there is nothing to confirm
        if events
            .iter()
            .any(|event| matches!(event, Event::JackpotEntered { .. }))
        {
            let notify = self.notify(
                NotificationKind::Success,
                "Successfully entered the jackpot game!",
                String::new(),
            );
            events.extend(self.apply(notify).await?);
        }
        Ok(events)
    }

    pub async fn claim_prize(&self, prize_id: &str) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to claim prize";
        Command::ClaimPrize {
            prize_id: prize_id.to_string(),
            claimed_at_ms: 0,
        }
        .validate()?;
        let description = self
            .store
            .clone()
            .snapshot()
            .await?
            .prize(prize_id)
            .map(|prize| prize.description.clone())
            .unwrap_or_default();
        self.dispatch(FAILURE, self.backend.claim_prize(prize_id))
            .await?;
        let commands = vec![
            Command::ClaimPrize {
                prize_id: prize_id.to_string(),
                claimed_at_ms: self.now_ms(),
            },
            self.notify(
                NotificationKind::Success,
                "Prize claimed successfully!",
                description,
            ),
        ];
        self.finish(FAILURE, commands).await
    }

    /// Ask the backend to grant a new random prize.
    pub async fn draw_prize(&self) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to draw prize";
        let prize = self
            .dispatch(FAILURE, self.backend.draw_prize(&self.user_id))
            .await?;
        let description = prize.description.clone();
        let commands = vec![
            Command::GrantPrize { prize },
            self.notify(NotificationKind::Info, "New prize unlocked!", description),
        ];
        self.finish(FAILURE, commands).await
    }

    /// Send a question to the assistant and record its reply.
    pub async fn send_message(&self, text: &str) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to send message";
        validate_message(text)?;
        if !self.store.clone().snapshot().await?.assistant_online {
            return Err(SessionError::AssistantOffline);
        }
        let request = AssistanceRequest {
            user_id: self.user_id.clone(),
            message: text.to_string(),
        };
        let reply = self
            .dispatch(FAILURE, self.backend.send_message(request))
            .await?;
        let commands = vec![
            Command::AppendAssistantReply { message: reply },
            self.notify(
                NotificationKind::Success,
                "Message sent!",
                "The assistant will respond shortly.".to_string(),
            ),
        ];
        self.finish(FAILURE, commands).await
    }

    pub async fn join_tournament(&self, tournament_id: &str) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to join tournament";
        Command::JoinTournament {
            tournament_id: tournament_id.to_string(),
        }
        .validate()?;
        let name = self
            .store
            .clone()
            .snapshot()
            .await?
            .tournament(tournament_id)
            .map(|tournament| tournament.name.clone())
            .unwrap_or_else(|| format!("tournament {tournament_id}"));
        self.dispatch(
            FAILURE,
            self.backend.join_tournament(tournament_id, &self.user_id),
        )
        .await?;
        let commands = vec![
            Command::JoinTournament {
                tournament_id: tournament_id.to_string(),
            },
            self.notify(
                NotificationKind::Success,
                &format!("Successfully joined {name}!"),
                String::new(),
            ),
        ];
        self.finish(FAILURE, commands).await
    }

    /// Start a game unless one is still waiting for its score.
    pub async fn start_game(&self, game_type: &str) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to start game session";
        if game_type.trim().is_empty() {
            return Err(CommandError::EmptyId { field: "game_type" }.into());
        }
        if self.store.clone().snapshot().await?.game_in_progress().is_some() {
            return Err(SessionError::GameInProgress);
        }
        let session = self
            .dispatch(
                FAILURE,
                self.backend.start_game_session(&self.user_id, game_type),
            )
            .await?;
        self.finish(FAILURE, vec![Command::StartGameSession { session }]).await
    }

    /// Record the score of the game in progress.
    pub async fn end_game(&self, score: u64) -> Result<Vec<Event>, SessionError> {
        const FAILURE: &str = "Failed to end game session";
        let session_id = match self.store.clone().snapshot().await?.game_in_progress() {
            Some(session) => session.id.clone(),
            None => return Err(SessionError::NoGameInProgress),
        };
        let session = self
            .dispatch(FAILURE, self.backend.end_game_session(&session_id, score))
            .await?;
        let commands = vec![
            Command::EndGameSession {
                session_id,
                score: session.score.unwrap_or(score),
                ended_at_ms: session.ended_at_ms.unwrap_or_else(|| self.now_ms()),
            },
            self.notify(
                NotificationKind::Info,
                "Game complete!",
                format!("Final score: {score}"),
            ),
        ];
        self.finish(FAILURE, commands).await
    }

    pub async fn open_message(&self, message_id: &str) -> Result<Vec<Event>, SessionError> {
        self.apply(Command::MarkMessageRead {
            message_id: message_id.to_string(),
        })
        .await
    }

    pub async fn read_notification(&self, id: u64) -> Result<Vec<Event>, SessionError> {
        self.apply(Command::MarkNotificationRead { id }).await
    }

    pub async fn dismiss_notification(&self, id: u64) -> Result<Vec<Event>, SessionError> {
        self.apply(Command::DismissNotification { id }).await
    }

    pub async fn clear_notifications(&self) -> Result<Vec<Event>, SessionError> {
        self.apply(Command::ClearNotifications).await
    }

    fn now_ms(&self) -> u64 {
        system_time_ms(self.context.current())
    }

    fn notify(&self, kind: NotificationKind, title: &str, message: String) -> Command {
        Command::Notify {
            kind,
            title: title.to_string(),
            message,
            duration_ms: None,
            at_ms: self.now_ms(),
        }
    }

    async fn apply(&self, command: Command) -> Result<Vec<Event>, SessionError> {
        Ok(self.store.clone().apply(command).await?)
    }

    /// Close the open request as failed, surfacing `message` as an error notification.
    async fn fail(&self, failure: &str, message: String) -> Result<(), SessionError> {
        self.store
            .clone()
            .apply(Command::RequestFailed {
                title: failure.to_string(),
                message,
                at_ms: self.now_ms(),
            })
            .await?;
        Ok(())
    }

    /// Mark a request in flight and await the backend, recording a failure if it fails.
    async fn dispatch<T>(
        &self,
        failure: &str,
        call: impl Future<Output = Result<T, BackendError>>,
    ) -> Result<T, SessionError> {
        self.store.clone().apply(Command::RequestStarted).await?;
        match call.await {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(user_id = %self.user_id, ?err, "{}", failure);
                self.fail(failure, err.to_string()).await?;
                Err(err.into())
            }
        }
    }

    /// Apply a successful result and close the request in one update.
    ///
    /// A result the store rejects as malformed closes the request as failed instead.
    async fn finish(
        &self,
        failure: &str,
        mut commands: Vec<Command>,
    ) -> Result<Vec<Event>, SessionError> {
        commands.push(Command::RequestFinished);
        match self.store.clone().apply_all(commands).await {
            Ok(events) => {
                info!(user_id = %self.user_id, events = events.len(), "request finished");
                Ok(events)
            }
            Err(MailboxError::Invalid(err)) => {
                warn!(user_id = %self.user_id, ?err, "{}: malformed backend result", failure);
                self.fail(failure, err.to_string()).await?;
                Err(SessionError::Malformed(err))
            }
            Err(err) => Err(err.into()),
        }
    }
}
