use gamehub_types::gaming::{
    AssistanceRequest, AssistantMessage, GameSession, JackpotEntry, JackpotGame,
    PrizeDistribution, Tournament,
};
use std::{future::Future, time::Duration};
use thiserror::Error;

/// Failures reported by a backend.
///
/// The display string is what the user is shown.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Network error. Please try again.")]
    Network,
    #[error("Tournament not found")]
    TournamentNotFound,
    #[error("Tournament is full")]
    TournamentFull,
    #[error("Registration is closed")]
    RegistrationClosed,
    #[error("Already registered for this tournament")]
    AlreadyJoined,
    #[error("Game session not found")]
    GameSessionNotFound,
    #[error("Game session has already ended")]
    GameSessionEnded,
    #[error("Backend unavailable")]
    Unavailable,
}

/// Calls a backend answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchJackpots,
    FetchPrizes,
    ClaimPrize,
    DrawPrize,
    FetchMessages,
    SendMessage,
    EnterJackpot,
    FetchTournaments,
    FetchUserTournaments,
    JoinTournament,
    StartGameSession,
    EndGameSession,
}

impl Operation {
    /// Simulated round-trip time before jitter.
    pub fn latency(&self) -> Duration {
        let ms = match self {
            Self::FetchJackpots => 1_000,
            Self::FetchPrizes => 800,
            Self::ClaimPrize => 1_200,
            Self::DrawPrize => 1_000,
            Self::FetchMessages => 600,
            Self::SendMessage => 1_500,
            Self::EnterJackpot => 1_000,
            Self::FetchTournaments => 600,
            Self::FetchUserTournaments => 600,
            Self::JoinTournament => 800,
            Self::StartGameSession => 300,
            Self::EndGameSession => 500,
        };
        Duration::from_millis(ms)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchJackpots => "fetch_jackpots",
            Self::FetchPrizes => "fetch_prizes",
            Self::ClaimPrize => "claim_prize",
            Self::DrawPrize => "draw_prize",
            Self::FetchMessages => "fetch_messages",
            Self::SendMessage => "send_message",
            Self::EnterJackpot => "enter_jackpot",
            Self::FetchTournaments => "fetch_tournaments",
            Self::FetchUserTournaments => "fetch_user_tournaments",
            Self::JoinTournament => "join_tournament",
            Self::StartGameSession => "start_game_session",
            Self::EndGameSession => "end_game_session",
        }
    }
}

/// Trait for interacting with the gaming backend.
pub trait Backend: Clone + Send + Sync + 'static {
    fn fetch_jackpots(&self) -> impl Future<Output = Result<Vec<JackpotGame>, Error>> + Send;

    /// Prizes currently offered to a user.
    fn fetch_prizes(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<PrizeDistribution>, Error>> + Send;

    fn claim_prize(&self, prize_id: &str) -> impl Future<Output = Result<(), Error>> + Send;

    /// Grant a new random prize to a user.
    fn draw_prize(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<PrizeDistribution, Error>> + Send;

    fn fetch_messages(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<AssistantMessage>, Error>> + Send;

    /// Ask the assistant a question and receive its reply.
    fn send_message(
        &self,
        request: AssistanceRequest,
    ) -> impl Future<Output = Result<AssistantMessage, Error>> + Send;

    fn enter_jackpot(
        &self,
        entry: JackpotEntry,
    ) -> impl Future<Output = Result<JackpotEntry, Error>> + Send;

    fn fetch_tournaments(&self) -> impl Future<Output = Result<Vec<Tournament>, Error>> + Send;

    /// Ids of the tournaments a user is registered for.
    fn fetch_user_tournaments(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, Error>> + Send;

    /// Register a user, enforcing capacity and registration status.
    fn join_tournament(
        &self,
        tournament_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn start_game_session(
        &self,
        user_id: &str,
        game_type: &str,
    ) -> impl Future<Output = Result<GameSession, Error>> + Send;

    /// Record the final score of a game session and return it completed.
    fn end_game_session(
        &self,
        session_id: &str,
        score: u64,
    ) -> impl Future<Output = Result<GameSession, Error>> + Send;
}
