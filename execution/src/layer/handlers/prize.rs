use super::super::*;
use gamehub_types::gaming::PrizeDistribution;

impl Layer {
    // === Prize Handlers ===

    fn is_claimed(&self, prize_id: &str) -> bool {
        self.pending.claimed_prizes.iter().any(|p| p.id == prize_id)
    }

    pub(in crate::layer) fn handle_load_prizes(
        &mut self,
        prizes: Vec<PrizeDistribution>,
    ) -> Vec<Event> {
        // A prize that was already claimed this session stays claimed
        let prizes: Vec<_> = prizes
            .into_iter()
            .filter(|prize| !prize.is_claimed() && !self.is_claimed(&prize.id))
            .collect();
        let count = prizes.len();
        self.pending.available_prizes = prizes;
        vec![Event::PrizesLoaded { count }]
    }

    pub(in crate::layer) fn handle_grant_prize(&mut self, prize: PrizeDistribution) -> Vec<Event> {
        if prize.is_claimed()
            || self.is_claimed(&prize.id)
            || self.pending.available_prizes.iter().any(|p| p.id == prize.id)
        {
            return vec![];
        }
        let prize_id = prize.id.clone();
        self.pending.available_prizes.push(prize);
        vec![Event::PrizeGranted { prize_id }]
    }

    pub(in crate::layer) fn handle_claim_prize(
        &mut self,
        prize_id: &str,
        claimed_at_ms: u64,
    ) -> Vec<Event> {
        let Some(index) = self
            .pending
            .available_prizes
            .iter()
            .position(|p| p.id == prize_id)
        else {
            return vec![];
        };

        let mut prize = self.pending.available_prizes.remove(index);
        prize.claimed_at_ms = Some(claimed_at_ms);
        self.pending.claimed_prizes.push(prize);
        self.pending.daily_prizes_remaining = self.pending.daily_prizes_remaining.saturating_sub(1);

        vec![Event::PrizeClaimed {
            prize_id: prize_id.to_string(),
            claimed_at_ms,
            daily_prizes_remaining: self.pending.daily_prizes_remaining,
        }]
    }

    pub(in crate::layer) fn handle_reset_daily_prizes(&mut self) -> Vec<Event> {
        if self.pending.daily_prizes_remaining == self.pending.daily_prize_allowance {
            return vec![];
        }
        self.pending.daily_prizes_remaining = self.pending.daily_prize_allowance;
        vec![Event::DailyPrizesReset {
            remaining: self.pending.daily_prizes_remaining,
        }]
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        mocks::{create_prize, seeded_snapshot},
        Layer,
    };
    use gamehub_types::{gaming::PrizeKind, Command, Event};

    fn claim(prize_id: &str, claimed_at_ms: u64) -> Command {
        Command::ClaimPrize {
            prize_id: prize_id.to_string(),
            claimed_at_ms,
        }
    }

    #[test]
    fn test_claim_moves_prize_once() {
        let state = seeded_snapshot();
        assert_eq!(state.daily_prizes_remaining, 3);

        let mut layer = Layer::new(&state);
        let events = layer.apply(claim("prize-1", 1_000));
        assert_eq!(
            events,
            vec![Event::PrizeClaimed {
                prize_id: "prize-1".to_string(),
                claimed_at_ms: 1_000,
                daily_prizes_remaining: 2,
            }]
        );

        // A second claim finds nothing to move
        assert!(layer.apply(claim("prize-1", 2_000)).is_empty());

        let next = layer.commit();
        assert_eq!(next.daily_prizes_remaining, 2);
        assert!(next.available_prizes.iter().all(|p| p.id != "prize-1"));
        let claimed: Vec<_> = next
            .claimed_prizes
            .iter()
            .filter(|p| p.id == "prize-1")
            .collect();
        assert_eq!(claimed.len(), 1);
        assert_eq!(claimed[0].claimed_at_ms, Some(1_000));
    }

    #[test]
    fn test_claim_unknown_prize_is_noop() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        assert!(layer.apply(claim("prize-404", 1)).is_empty());
        assert_eq!(layer.commit(), state);
    }

    #[test]
    fn test_daily_remaining_floors_at_zero() {
        let mut state = seeded_snapshot();
        state.daily_prizes_remaining = 1;
        let mut layer = Layer::new(&state);
        for i in 0..4 {
            layer.apply(Command::GrantPrize {
                prize: create_prize(&format!("bonus-{i}"), PrizeKind::Bonus, 10),
            });
        }
        for id in ["prize-1", "prize-2", "bonus-0", "bonus-1", "bonus-2", "bonus-3"] {
            layer.apply(claim(id, 5));
        }
        let next = layer.commit();
        assert_eq!(next.daily_prizes_remaining, 0);
        assert_eq!(next.claimed_prizes.len(), 6);
        assert!(next.available_prizes.is_empty());
    }

    #[test]
    fn test_grant_keeps_collections_disjoint() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        layer.apply(claim("prize-1", 5));

        // Already claimed
        assert!(layer
            .apply(Command::GrantPrize {
                prize: create_prize("prize-1", PrizeKind::Cash, 50),
            })
            .is_empty());
        // Already available
        assert!(layer
            .apply(Command::GrantPrize {
                prize: create_prize("prize-2", PrizeKind::FreeSpins, 25),
            })
            .is_empty());
        // New
        assert_eq!(
            layer.apply(Command::GrantPrize {
                prize: create_prize("prize-3", PrizeKind::Item, 1),
            }),
            vec![Event::PrizeGranted {
                prize_id: "prize-3".to_string()
            }]
        );
    }

    #[test]
    fn test_reload_does_not_resurrect_claimed_prize() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);
        layer.apply(claim("prize-2", 5));
        layer.apply(Command::LoadPrizes {
            prizes: state.available_prizes.clone(),
        });
        let next = layer.commit();
        assert_eq!(next.available_prizes.len(), 1);
        assert_eq!(next.available_prizes[0].id, "prize-1");
        assert_eq!(next.claimed_prizes.len(), 1);
    }

    #[test]
    fn test_reset_daily_prizes() {
        let state = seeded_snapshot();
        let mut layer = Layer::new(&state);

        // Nothing to restore yet
        assert!(layer.apply(Command::ResetDailyPrizes).is_empty());

        layer.apply(claim("prize-1", 5));
        assert_eq!(
            layer.apply(Command::ResetDailyPrizes),
            vec![Event::DailyPrizesReset { remaining: 3 }]
        );
        assert_eq!(layer.commit().daily_prizes_remaining, 3);
    }
}
