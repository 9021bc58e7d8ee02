//! In-process stand-in for the gaming backend.
//!
//! Every call waits out a per-operation latency on the runtime clock, may fail with a
//! network error, and then answers from a shared set of [Fixtures] that later calls
//! observe (a joined tournament stays joined, a claimed prize is no longer offered).

use commonware_runtime::Clock;
use gamehub_types::{
    gaming::{
        AssistanceRequest, AssistantMessage, GameSession, JackpotEntry, JackpotGame,
        MessageKind, PrizeDistribution, Tournament, ASSISTANT_REPLY,
    },
    system_time_ms,
};
use rand::{Rng, RngCore};
use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};
use tracing::{debug, error, info, warn};
use uuid::{Builder, Uuid};

mod backend;
pub use backend::{Backend, Error, Operation};
pub mod fixtures;
pub use fixtures::Fixtures;

/// Simulator configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Upper bound of random delay added to every call.
    pub jitter: Duration,
    /// Probability in `[0, 1]` that a call fails with [Error::Network].
    pub failure_rate: f64,
}

#[derive(Clone)]
pub struct Simulator<E: Clock + RngCore + Clone + Send + Sync + 'static> {
    context: E,
    config: Config,
    fixtures: Arc<Mutex<Fixtures>>,
}

impl<E: Clock + RngCore + Clone + Send + Sync + 'static> Simulator<E> {
    /// Create a simulator seeded with fixtures dated relative to the context's clock.
    pub fn new(context: E, config: Config) -> Self {
        let fixtures = Fixtures::seeded(system_time_ms(context.current()));
        Self::with_fixtures(context, config, fixtures)
    }

    pub fn with_fixtures(context: E, mut config: Config, fixtures: Fixtures) -> Self {
        config.failure_rate = config.failure_rate.clamp(0.0, 1.0);
        Self {
            context,
            config,
            fixtures: Arc::new(Mutex::new(fixtures)),
        }
    }

    /// Copy of the current backend records.
    pub fn fixtures(&self) -> Result<Fixtures, Error> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Fixtures>, Error> {
        self.fixtures.lock().map_err(|e| {
            error!("failed to acquire fixtures lock: {}", e);
            Error::Unavailable
        })
    }

    fn now_ms(&self) -> u64 {
        system_time_ms(self.context.current())
    }

    fn new_id(&self, prefix: &str) -> String {
        let mut rng = self.context.clone();
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        let id: Uuid = Builder::from_random_bytes(bytes).into_uuid();
        format!("{prefix}-{id}")
    }

    /// Wait out the call's latency, then decide whether it fails.
    async fn respond(&self, operation: Operation) -> Result<(), Error> {
        let mut rng = self.context.clone();
        let mut latency = operation.latency();
        let jitter = self.config.jitter.as_millis() as u64;
        if jitter > 0 {
            latency += Duration::from_millis(rng.gen_range(0..=jitter));
        }
        self.context.sleep(latency).await;

        if self.config.failure_rate > 0.0 && rng.gen_bool(self.config.failure_rate) {
            warn!(operation = operation.name(), "injected backend failure");
            return Err(Error::Network);
        }
        debug!(
            operation = operation.name(),
            latency_ms = latency.as_millis() as u64,
            "backend call answered"
        );
        Ok(())
    }
}

impl<E: Clock + RngCore + Clone + Send + Sync + 'static> Backend for Simulator<E> {
    async fn fetch_jackpots(&self) -> Result<Vec<JackpotGame>, Error> {
        self.respond(Operation::FetchJackpots).await?;
        Ok(self.lock()?.jackpots.clone())
    }

    async fn fetch_prizes(&self, user_id: &str) -> Result<Vec<PrizeDistribution>, Error> {
        self.respond(Operation::FetchPrizes).await?;
        Ok(self
            .lock()?
            .prizes
            .iter()
            .filter(|prize| prize.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn claim_prize(&self, prize_id: &str) -> Result<(), Error> {
        self.respond(Operation::ClaimPrize).await?;
        self.lock()?.prizes.retain(|prize| prize.id != prize_id);
        info!(prize_id, "prize claimed");
        Ok(())
    }

    async fn draw_prize(&self, user_id: &str) -> Result<PrizeDistribution, Error> {
        self.respond(Operation::DrawPrize).await?;
        let mut rng = self.context.clone();
        let (kind, value, description) =
            fixtures::PRIZE_TABLE[rng.gen_range(0..fixtures::PRIZE_TABLE.len())];
        let prize = PrizeDistribution {
            id: self.new_id("prize"),
            user_id: user_id.to_string(),
            kind,
            value,
            description: description.to_string(),
            expires_at_ms: self.now_ms() + fixtures::PRIZE_LIFETIME_MS,
            claimed_at_ms: None,
            active: true,
        };
        self.lock()?.prizes.push(prize.clone());
        info!(prize_id = %prize.id, user_id, value, "prize drawn");
        Ok(prize)
    }

    async fn fetch_messages(&self, user_id: &str) -> Result<Vec<AssistantMessage>, Error> {
        self.respond(Operation::FetchMessages).await?;
        Ok(self
            .lock()?
            .messages
            .iter()
            .filter(|message| message.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn send_message(&self, request: AssistanceRequest) -> Result<AssistantMessage, Error> {
        self.respond(Operation::SendMessage).await?;
        let reply = AssistantMessage {
            id: self.new_id("msg"),
            user_id: request.user_id,
            body: ASSISTANT_REPLY.to_string(),
            kind: MessageKind::Assistance,
            timestamp_ms: self.now_ms(),
            read: false,
        };
        self.lock()?.messages.insert(0, reply.clone());
        Ok(reply)
    }

    async fn enter_jackpot(&self, entry: JackpotEntry) -> Result<JackpotEntry, Error> {
        self.respond(Operation::EnterJackpot).await?;
        let mut fixtures = self.lock()?;
        match fixtures
            .jackpots
            .iter_mut()
            .find(|g| g.id == entry.game_id && g.active)
        {
            Some(game) => {
                game.current_pool = game
                    .current_pool
                    .saturating_add(JackpotGame::contribution(entry.entry_fee));
                game.participants = game.participants.saturating_add(1);
            }
            None => debug!(game_id = %entry.game_id, "entry for unknown or inactive jackpot"),
        }
        Ok(entry)
    }

    async fn fetch_tournaments(&self) -> Result<Vec<Tournament>, Error> {
        self.respond(Operation::FetchTournaments).await?;
        Ok(self.lock()?.tournaments.clone())
    }

    async fn join_tournament(&self, tournament_id: &str, user_id: &str) -> Result<(), Error> {
        self.respond(Operation::JoinTournament).await?;
        let mut guard = self.lock()?;
        let fixtures = &mut *guard;
        let tournament = fixtures
            .tournaments
            .iter_mut()
            .find(|t| t.id == tournament_id)
            .ok_or(Error::TournamentNotFound)?;
        if tournament.is_full() {
            return Err(Error::TournamentFull);
        }
        if !tournament.is_registering() {
            return Err(Error::RegistrationClosed);
        }
        if !fixtures
            .registrations
            .insert((tournament_id.to_string(), user_id.to_string()))
        {
            return Err(Error::AlreadyJoined);
        }
        tournament.current_participants += 1;
        info!(
            tournament_id,
            user_id,
            participants = tournament.current_participants,
            "joined tournament"
        );
        Ok(())
    }

    async fn fetch_user_tournaments(&self, user_id: &str) -> Result<Vec<String>, Error> {
        self.respond(Operation::FetchUserTournaments).await?;
        Ok(self
            .lock()?
            .registrations
            .iter()
            .filter(|(_, registered)| registered == user_id)
            .map(|(tournament_id, _)| tournament_id.clone())
            .collect())
    }

    async fn start_game_session(
        &self,
        user_id: &str,
        game_type: &str,
    ) -> Result<GameSession, Error> {
        self.respond(Operation::StartGameSession).await?;
        let session = GameSession::new(self.new_id("game"), user_id, game_type, self.now_ms());
        self.lock()?.game_sessions.push(session.clone());
        info!(session_id = %session.id, user_id, game_type, "game session started");
        Ok(session)
    }

    async fn end_game_session(&self, session_id: &str, score: u64) -> Result<GameSession, Error> {
        self.respond(Operation::EndGameSession).await?;
        let ended_at_ms = self.now_ms();
        let mut fixtures = self.lock()?;
        let session = fixtures
            .game_sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or(Error::GameSessionNotFound)?;
        if !session.in_progress() {
            return Err(Error::GameSessionEnded);
        }
        session.complete(score, ended_at_ms);
        info!(session_id, score, "game session ended");
        Ok(session.clone())
    }
}

#[cfg(test)]
mod tests;
