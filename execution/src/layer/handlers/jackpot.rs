use super::super::*;
use gamehub_types::gaming::JackpotGame;
use tracing::warn;

impl Layer {
    // === Jackpot Handlers ===

    pub(in crate::layer) fn handle_load_jackpots(
        &mut self,
        mut games: Vec<JackpotGame>,
    ) -> Vec<Event> {
        for game in games.iter_mut() {
            if game.current_pool < game.base_prize {
                warn!(
                    game_id = %game.id,
                    pool = game.current_pool,
                    base = game.base_prize,
                    "jackpot pool below base prize, raising to base"
                );
                game.current_pool = game.base_prize;
            }
        }
        let count = games.len();
        self.pending.jackpots = games;
        vec![Event::JackpotsLoaded { count }]
    }

    pub(in crate::layer) fn handle_enter_jackpot(
        &mut self,
        game_id: &str,
        entry_fee: u64,
    ) -> Vec<Event> {
        if entry_fee == 0 {
            return vec![];
        }
        let Some(game) = self.pending.jackpots.iter_mut().find(|g| g.id == game_id) else {
            return vec![];
        };
        if !game.active {
            return vec![];
        }

        let contribution = JackpotGame::contribution(entry_fee);
        game.current_pool = game.current_pool.saturating_add(contribution);
        game.participants = game.participants.saturating_add(1);

        vec![Event::JackpotEntered {
            game_id: game.id.clone(),
            contribution,
            pool: game.current_pool,
            participants: game.participants,
        }]
    }

    pub(in crate::layer) fn handle_grow_jackpot(
        &mut self,
        game_id: &str,
        amount: u64,
    ) -> Vec<Event> {
        if amount == 0 {
            return vec![];
        }
        let Some(game) = self
            .pending
            .jackpots
            .iter_mut()
            .find(|g| g.id == game_id && g.active)
        else {
            return vec![];
        };

        game.current_pool = game.current_pool.saturating_add(amount);

        vec![Event::JackpotGrew {
            game_id: game.id.clone(),
            amount,
            pool: game.current_pool,
        }]
    }

    pub(in crate::layer) fn handle_payout_jackpot(
        &mut self,
        game_id: &str,
        winner: String,
        paid_at_ms: u64,
    ) -> Vec<Event> {
        let Some(game) = self
            .pending
            .jackpots
            .iter_mut()
            .find(|g| g.id == game_id && g.active)
        else {
            return vec![];
        };

        // Pay out the whole pool, then reseed at the base prize
        let amount = game.current_pool;
        game.last_winner = Some(winner.clone());
        game.last_win_amount = Some(amount);
        game.last_win_ms = Some(paid_at_ms);
        game.current_pool = game.base_prize;

        vec![Event::JackpotPaidOut {
            game_id: game.id.clone(),
            winner,
            amount,
        }]
    }
}
