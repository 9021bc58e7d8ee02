use crate::Layer;
use gamehub_types::{gaming::Snapshot, Command, Event};

/// Result of applying a batch of commands to a snapshot
pub struct StateTransitionResult {
    pub snapshot: Snapshot,
    pub events: Vec<Event>,
}

impl StateTransitionResult {
    /// Whether any command in the batch changed the state.
    pub fn changed(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Apply commands in order and return the next snapshot.
///
/// Commands are not validated here; callers reject malformed payloads before they reach
/// the state. A command that does not apply (unknown id, closed registration, ...) simply
/// contributes no events.
pub fn execute(state: &Snapshot, commands: Vec<Command>) -> StateTransitionResult {
    let mut layer = Layer::new(state);
    let mut events = Vec::new();
    for command in commands {
        events.extend(layer.apply(command));
    }
    StateTransitionResult {
        snapshot: layer.commit(),
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::seeded_snapshot;

    #[test]
    fn test_execute_applies_in_order() {
        let state = seeded_snapshot();
        let result = execute(
            &state,
            vec![
                Command::RequestStarted,
                Command::ClaimPrize {
                    prize_id: "prize-1".to_string(),
                    claimed_at_ms: 7,
                },
                Command::Notify {
                    kind: gamehub_types::gaming::NotificationKind::Success,
                    title: "Prize claimed!".to_string(),
                    message: "$50 Cash Bonus".to_string(),
                    duration_ms: None,
                    at_ms: 7,
                },
                Command::RequestFinished,
            ],
        );
        assert!(result.changed());
        assert_eq!(result.events.len(), 4);
        assert_eq!(result.snapshot.claimed_prizes.len(), 1);
        assert_eq!(result.snapshot.notifications.len(), 1);
        assert!(!result.snapshot.is_loading());
    }

    #[test]
    fn test_execute_noop_batch() {
        let state = seeded_snapshot();
        let result = execute(
            &state,
            vec![Command::EnterJackpot {
                game_id: "missing".to_string(),
                entry_fee: 10,
            }],
        );
        assert!(!result.changed());
        assert_eq!(result.snapshot, state);
    }
}
