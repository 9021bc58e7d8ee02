//! Test fixtures for the mutation rules.

use crate::Layer;
use gamehub_types::{
    gaming::{
        AssistantMessage, JackpotGame, JackpotTier, MessageKind, PrizeDistribution, PrizeKind,
        Snapshot, Tournament, TournamentStatus, DEFAULT_USER_ID,
    },
    Command,
};

/// Creates a jackpot with the given pool and base prize.
pub fn create_jackpot(id: &str, tier: JackpotTier, pool: u64, base: u64) -> JackpotGame {
    let mut game = JackpotGame::new(id, format!("{id} jackpot"), tier, base);
    game.current_pool = pool;
    game
}

/// Creates an unclaimed prize for the default user.
pub fn create_prize(id: &str, kind: PrizeKind, value: u64) -> PrizeDistribution {
    PrizeDistribution {
        id: id.to_string(),
        user_id: DEFAULT_USER_ID.to_string(),
        kind,
        value,
        description: format!("{value} {kind:?}"),
        expires_at_ms: u64::MAX,
        claimed_at_ms: None,
        active: true,
    }
}

pub fn create_message(id: &str, kind: MessageKind, read: bool) -> AssistantMessage {
    AssistantMessage {
        id: id.to_string(),
        user_id: DEFAULT_USER_ID.to_string(),
        body: format!("{kind:?} message"),
        kind,
        timestamp_ms: 0,
        read,
    }
}

pub fn create_tournament(
    id: &str,
    status: TournamentStatus,
    current_participants: u32,
    max_participants: u32,
) -> Tournament {
    Tournament {
        id: id.to_string(),
        name: format!("Tournament {id}"),
        game_type: "Poker".to_string(),
        start_ms: 0,
        end_ms: 0,
        max_participants,
        current_participants,
        prize_pool: 10_000,
        entry_fee: 100,
        status,
        description: String::new(),
        rules: vec![],
        organizer_id: "org-1".to_string(),
    }
}

/// Creates a snapshot loaded with three jackpots, two prizes, two messages, and four
/// tournaments, with aggregates already computed.
pub fn seeded_snapshot() -> Snapshot {
    let mut layer = Layer::new(&Snapshot::default());
    layer.apply(Command::LoadJackpots {
        games: vec![
            create_jackpot("mega-1", JackpotTier::Mega, 2_450_000, 1_000_000),
            create_jackpot("major-1", JackpotTier::Major, 125_000, 50_000),
            create_jackpot("minor-1", JackpotTier::Minor, 8_500, 1_000),
        ],
    });
    layer.apply(Command::LoadPrizes {
        prizes: vec![
            create_prize("prize-1", PrizeKind::Cash, 50),
            create_prize("prize-2", PrizeKind::FreeSpins, 25),
        ],
    });
    layer.apply(Command::LoadMessages {
        messages: vec![
            create_message("msg-1", MessageKind::Welcome, false),
            create_message("msg-2", MessageKind::Congratulations, true),
        ],
    });
    layer.apply(Command::LoadTournaments {
        tournaments: vec![
            create_tournament("1", TournamentStatus::Registration, 45, 100),
            create_tournament("2", TournamentStatus::Registration, 23, 50),
            create_tournament("3", TournamentStatus::Registration, 199, 200),
            create_tournament("4", TournamentStatus::Active, 75, 75),
        ],
    });
    layer.commit()
}
