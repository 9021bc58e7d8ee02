//! Seed data served by the simulator.

use gamehub_types::gaming::{
    AssistantMessage, GameSession, JackpotGame, JackpotTier, MessageKind, PrizeDistribution,
    PrizeKind, Tournament, TournamentStatus, DAY_MS, DEFAULT_USER_ID,
};
use std::collections::BTreeSet;

const HOUR_MS: u64 = 60 * 60 * 1_000;

/// How long a drawn prize stays claimable.
pub const PRIZE_LIFETIME_MS: u64 = 7 * DAY_MS;

/// Prizes a draw picks from (kind, value, description).
pub const PRIZE_TABLE: &[(PrizeKind, u64, &str)] = &[
    (PrizeKind::Cash, 10, "$10 Cash Bonus"),
    (PrizeKind::Cash, 50, "$50 Cash Bonus"),
    (PrizeKind::Bonus, 100, "100% Deposit Match up to $100"),
    (PrizeKind::FreeSpins, 10, "10 Free Spins on Slot Games"),
    (PrizeKind::FreeSpins, 25, "25 Free Spins on Slot Games"),
    (PrizeKind::Item, 1, "Mystery Loot Box"),
];

/// Mutable backend records.
#[derive(Clone, Debug)]
pub struct Fixtures {
    pub jackpots: Vec<JackpotGame>,
    pub prizes: Vec<PrizeDistribution>,
    pub messages: Vec<AssistantMessage>,
    pub tournaments: Vec<Tournament>,
    /// Tournament registrations as (tournament id, user id).
    pub registrations: BTreeSet<(String, String)>,
    pub game_sessions: Vec<GameSession>,
}

impl Fixtures {
    /// Seed records with dates relative to `now_ms`.
    pub fn seeded(now_ms: u64) -> Self {
        Self {
            jackpots: jackpots(),
            prizes: prizes(now_ms),
            messages: messages(now_ms),
            tournaments: tournaments(now_ms),
            registrations: BTreeSet::new(),
            game_sessions: Vec::new(),
        }
    }
}

fn jackpot(
    id: &str,
    name: &str,
    tier: JackpotTier,
    pool: u64,
    base: u64,
    participants: u64,
    last_win: Option<(&str, u64)>,
) -> JackpotGame {
    let mut game = JackpotGame::new(id, name, tier, base);
    game.current_pool = pool;
    game.participants = participants;
    if let Some((winner, amount)) = last_win {
        game.last_winner = Some(winner.to_string());
        game.last_win_amount = Some(amount);
    }
    game
}

pub fn jackpots() -> Vec<JackpotGame> {
    vec![
        jackpot(
            "mega-1",
            "Mega Fortune Jackpot",
            JackpotTier::Mega,
            2_450_000,
            1_000_000,
            15_678,
            Some(("Player***123", 1_890_000)),
        ),
        jackpot(
            "major-1",
            "Major Wins Network",
            JackpotTier::Major,
            125_000,
            50_000,
            3_456,
            None,
        ),
        jackpot(
            "minor-1",
            "Quick Draw Jackpot",
            JackpotTier::Minor,
            8_500,
            1_000,
            890,
            Some(("Lucky***789", 7_800)),
        ),
    ]
}

fn prizes(now_ms: u64) -> Vec<PrizeDistribution> {
    vec![
        PrizeDistribution {
            id: "prize-1".to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            kind: PrizeKind::Cash,
            value: 50,
            description: "$50 Cash Bonus".to_string(),
            expires_at_ms: now_ms + 6 * DAY_MS,
            claimed_at_ms: None,
            active: true,
        },
        PrizeDistribution {
            id: "prize-2".to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            kind: PrizeKind::FreeSpins,
            value: 25,
            description: "25 Free Spins on Slot Games".to_string(),
            expires_at_ms: now_ms + 2 * DAY_MS,
            claimed_at_ms: None,
            active: true,
        },
    ]
}

fn messages(now_ms: u64) -> Vec<AssistantMessage> {
    vec![
        AssistantMessage {
            id: "msg-1".to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            body: "Welcome back! I see you're interested in our tournament games. Would you like some tips on strategy?".to_string(),
            kind: MessageKind::Welcome,
            timestamp_ms: now_ms.saturating_sub(HOUR_MS / 2),
            read: false,
        },
        AssistantMessage {
            id: "msg-2".to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            body: "Great win on the slots! Consider trying our jackpot games for even bigger prizes.".to_string(),
            kind: MessageKind::Congratulations,
            timestamp_ms: now_ms.saturating_sub(HOUR_MS),
            read: true,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn tournament(
    id: &str,
    name: &str,
    game_type: &str,
    start_ms: u64,
    end_ms: u64,
    current_participants: u32,
    max_participants: u32,
    prize_pool: u64,
    entry_fee: u64,
    status: TournamentStatus,
    description: &str,
) -> Tournament {
    Tournament {
        id: id.to_string(),
        name: name.to_string(),
        game_type: game_type.to_string(),
        start_ms,
        end_ms,
        max_participants,
        current_participants,
        prize_pool,
        entry_fee,
        status,
        description: description.to_string(),
        rules: vec![
            "Players must be 18 or older".to_string(),
            "One entry per player".to_string(),
        ],
        organizer_id: format!("org-{id}"),
    }
}

fn tournaments(now_ms: u64) -> Vec<Tournament> {
    vec![
        tournament(
            "1",
            "Winter Championship 2024",
            "Poker",
            now_ms + DAY_MS,
            now_ms + 7 * DAY_MS,
            45,
            100,
            10_000,
            100,
            TournamentStatus::Registration,
            "Annual winter poker championship",
        ),
        tournament(
            "2",
            "Speed Blackjack Tournament",
            "Blackjack",
            now_ms + 3 * DAY_MS,
            now_ms + 4 * DAY_MS,
            23,
            50,
            5_000,
            50,
            TournamentStatus::Registration,
            "Fast-paced blackjack tournament",
        ),
        tournament(
            "3",
            "Slots Master Challenge",
            "Slots",
            now_ms + 2 * HOUR_MS,
            now_ms + 26 * HOUR_MS,
            178,
            200,
            15_000,
            25,
            TournamentStatus::Registration,
            "Ultimate slots challenge",
        ),
        tournament(
            "4",
            "Roulette Royale",
            "Roulette",
            now_ms.saturating_sub(2 * HOUR_MS),
            now_ms + 22 * HOUR_MS,
            75,
            75,
            7_500,
            75,
            TournamentStatus::Active,
            "Royal roulette tournament in progress",
        ),
    ]
}
