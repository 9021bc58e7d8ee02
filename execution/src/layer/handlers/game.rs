use super::super::*;
use gamehub_types::gaming::GameSession;

impl Layer {
    // === Game Session Handlers ===

    pub(in crate::layer) fn handle_start_game_session(
        &mut self,
        session: GameSession,
    ) -> Vec<Event> {
        if let Some(current) = self.pending.game_in_progress() {
            debug!(
                current = %current.id,
                requested = %session.id,
                "game session already in progress"
            );
            return vec![];
        }
        let event = Event::GameSessionStarted {
            session_id: session.id.clone(),
            game_type: session.game_type.clone(),
        };
        self.pending.game_session = Some(session);
        vec![event]
    }

    pub(in crate::layer) fn handle_end_game_session(
        &mut self,
        session_id: &str,
        score: u64,
        ended_at_ms: u64,
    ) -> Vec<Event> {
        let Some(session) = self
            .pending
            .game_session
            .as_mut()
            .filter(|s| s.id == session_id && s.in_progress())
        else {
            return vec![];
        };
        session.complete(score, ended_at_ms);
        vec![Event::GameSessionEnded {
            session_id: session_id.to_string(),
            score,
        }]
    }
}
