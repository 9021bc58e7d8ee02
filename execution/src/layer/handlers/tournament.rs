use super::super::*;
use gamehub_types::gaming::Tournament;

impl Layer {
    // === Tournament Handlers ===

    pub(in crate::layer) fn handle_load_tournaments(
        &mut self,
        tournaments: Vec<Tournament>,
    ) -> Vec<Event> {
        let count = tournaments.len();
        self.pending.tournaments = tournaments;
        vec![Event::TournamentsLoaded { count }]
    }

    pub(in crate::layer) fn handle_load_user_tournaments(
        &mut self,
        tournament_ids: Vec<String>,
    ) -> Vec<Event> {
        self.pending.joined_tournaments = tournament_ids.into_iter().collect();
        vec![Event::UserTournamentsLoaded {
            count: self.pending.joined_tournaments.len(),
        }]
    }

    pub(in crate::layer) fn handle_join_tournament(&mut self, tournament_id: &str) -> Vec<Event> {
        if self.pending.has_joined(tournament_id) {
            return vec![];
        }
        let Some(tournament) = self
            .pending
            .tournaments
            .iter_mut()
            .find(|t| t.id == tournament_id)
        else {
            return vec![];
        };
        if !tournament.is_registering() || tournament.is_full() {
            return vec![];
        }

        tournament.current_participants += 1;
        let participants = tournament.current_participants;
        self.pending
            .joined_tournaments
            .insert(tournament_id.to_string());
        vec![Event::TournamentJoined {
            tournament_id: tournament_id.to_string(),
            participants,
        }]
    }
}
