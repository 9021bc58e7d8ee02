use super::*;
use commonware_macros::test_traced;
use commonware_runtime::{deterministic, Runner};
use gamehub_types::gaming::{TournamentStatus, DEFAULT_USER_ID, NETWORK_ERROR_MESSAGE};

fn elapsed(context: &deterministic::Context, start: std::time::SystemTime) -> Duration {
    context
        .current()
        .duration_since(start)
        .unwrap_or(Duration::ZERO)
}

#[test_traced("INFO")]
fn test_fetch_waits_for_latency() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let simulator = Simulator::new(context.clone(), Config::default());

        let start = context.current();
        let jackpots = simulator.fetch_jackpots().await.unwrap();
        assert!(elapsed(&context, start) >= Operation::FetchJackpots.latency());
        assert_eq!(jackpots.len(), 3);
        assert_eq!(jackpots[0].id, "mega-1");
        assert_eq!(jackpots[0].current_pool, 2_450_000);

        let start = context.current();
        let messages = simulator.fetch_messages(DEFAULT_USER_ID).await.unwrap();
        assert!(elapsed(&context, start) >= Operation::FetchMessages.latency());
        assert_eq!(messages.len(), 2);
    });
}

#[test_traced("INFO")]
fn test_fetch_filters_by_user() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let simulator = Simulator::new(context, Config::default());
        assert_eq!(simulator.fetch_prizes(DEFAULT_USER_ID).await.unwrap().len(), 2);
        assert!(simulator.fetch_prizes("someone-else").await.unwrap().is_empty());
        assert!(simulator
            .fetch_messages("someone-else")
            .await
            .unwrap()
            .is_empty());
    });
}

#[test_traced("INFO")]
fn test_injected_failure() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let simulator = Simulator::new(
            context,
            Config {
                jitter: Duration::from_millis(250),
                failure_rate: 1.0,
            },
        );
        let err = simulator.fetch_tournaments().await.unwrap_err();
        assert_eq!(err, Error::Network);
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    });
}

#[test_traced("INFO")]
fn test_join_tournament_checks() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let simulator = Simulator::new(context, Config::default());

        simulator.join_tournament("1", DEFAULT_USER_ID).await.unwrap();
        let tournaments = simulator.fetch_tournaments().await.unwrap();
        assert_eq!(tournaments[0].current_participants, 46);

        assert_eq!(
            simulator.join_tournament("404", DEFAULT_USER_ID).await,
            Err(Error::TournamentNotFound)
        );
        assert_eq!(
            simulator.join_tournament("4", DEFAULT_USER_ID).await,
            Err(Error::TournamentFull)
        );
        assert_eq!(
            Error::TournamentFull.to_string(),
            "Tournament is full".to_string()
        );
    });
}

#[test_traced("INFO")]
fn test_registrations_are_per_user() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let simulator = Simulator::new(context, Config::default());
        assert!(simulator
            .fetch_user_tournaments(DEFAULT_USER_ID)
            .await
            .unwrap()
            .is_empty());

        simulator.join_tournament("2", DEFAULT_USER_ID).await.unwrap();
        assert_eq!(
            simulator.join_tournament("2", DEFAULT_USER_ID).await,
            Err(Error::AlreadyJoined)
        );
        simulator.join_tournament("2", "other-user").await.unwrap();
        simulator.join_tournament("1", DEFAULT_USER_ID).await.unwrap();

        assert_eq!(
            simulator.fetch_user_tournaments(DEFAULT_USER_ID).await.unwrap(),
            vec!["1".to_string(), "2".to_string()]
        );
        assert_eq!(
            simulator.fetch_user_tournaments("other-user").await.unwrap(),
            vec!["2".to_string()]
        );
        assert_eq!(simulator.fixtures().unwrap().tournaments[1].current_participants, 25);
    });
}

#[test_traced("INFO")]
fn test_game_session_round_trip() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let simulator = Simulator::new(context.clone(), Config::default());

        let start = context.current();
        let session = simulator
            .start_game_session(DEFAULT_USER_ID, "slots")
            .await
            .unwrap();
        assert!(elapsed(&context, start) >= Operation::StartGameSession.latency());
        assert!(session.id.starts_with("game-"));
        assert_eq!(session.game_type, "slots");
        assert!(session.in_progress());

        let ended = simulator.end_game_session(&session.id, 1_250).await.unwrap();
        assert!(ended.completed);
        assert_eq!(ended.score, Some(1_250));
        assert!(ended.ended_at_ms.unwrap() >= session.started_at_ms + 500);

        assert_eq!(
            simulator.end_game_session(&session.id, 99).await,
            Err(Error::GameSessionEnded)
        );
        assert_eq!(
            simulator.end_game_session("game-404", 99).await,
            Err(Error::GameSessionNotFound)
        );
        assert_eq!(simulator.fixtures().unwrap().game_sessions, vec![ended]);
    });
}

#[test_traced("INFO")]
fn test_join_closed_registration() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let mut fixtures = Fixtures::seeded(0);
        fixtures.tournaments[1].status = TournamentStatus::Completed;
        let simulator = Simulator::with_fixtures(context, Config::default(), fixtures);
        assert_eq!(
            simulator.join_tournament("2", DEFAULT_USER_ID).await,
            Err(Error::RegistrationClosed)
        );
        assert_eq!(simulator.fixtures().unwrap().tournaments[1].current_participants, 23);
    });
}

#[test_traced("INFO")]
fn test_claimed_prize_not_offered_again() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let simulator = Simulator::new(context, Config::default());
        simulator.claim_prize("prize-1").await.unwrap();
        let prizes = simulator.fetch_prizes(DEFAULT_USER_ID).await.unwrap();
        assert_eq!(prizes.len(), 1);
        assert_eq!(prizes[0].id, "prize-2");
    });
}

#[test_traced("INFO")]
fn test_draw_and_reply_mint_ids() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let simulator = Simulator::new(context.clone(), Config::default());
        let now = system_time_ms(context.current());

        let prize = simulator.draw_prize(DEFAULT_USER_ID).await.unwrap();
        assert!(prize.id.starts_with("prize-"));
        assert!(!prize.is_claimed());
        assert!(prize.expires_at_ms > now);
        assert_eq!(simulator.fetch_prizes(DEFAULT_USER_ID).await.unwrap().len(), 3);

        let reply = simulator
            .send_message(AssistanceRequest {
                user_id: DEFAULT_USER_ID.to_string(),
                message: "How do jackpots work?".to_string(),
            })
            .await
            .unwrap();
        assert!(reply.id.starts_with("msg-"));
        assert_eq!(reply.kind, MessageKind::Assistance);
        assert_eq!(reply.body, ASSISTANT_REPLY);
        assert!(!reply.read);
        assert_ne!(reply.id, prize.id);
    });
}

#[test_traced("INFO")]
fn test_enter_jackpot_updates_records() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let simulator = Simulator::new(context, Config::default());
        let entry = JackpotEntry {
            game_id: "mega-1".to_string(),
            entry_fee: 10,
        };
        assert_eq!(simulator.enter_jackpot(entry.clone()).await.unwrap(), entry);
        let game = simulator.fixtures().unwrap().jackpots[0].clone();
        assert_eq!(game.current_pool, 2_450_008);
        assert_eq!(game.participants, 15_679);
    });
}

#[test_traced("INFO")]
fn test_enter_jackpot_saturates_and_skips_inactive() {
    let executor = deterministic::Runner::default();
    executor.start(|context| async move {
        let mut fixtures = Fixtures::seeded(0);
        fixtures.jackpots[1].active = false;
        let before = fixtures.jackpots.clone();
        let simulator = Simulator::with_fixtures(context, Config::default(), fixtures);

        for _ in 0..2 {
            simulator
                .enter_jackpot(JackpotEntry {
                    game_id: "mega-1".to_string(),
                    entry_fee: u64::MAX,
                })
                .await
                .unwrap();
        }
        for game_id in [before[1].id.clone(), "does-not-exist".to_string()] {
            simulator
                .enter_jackpot(JackpotEntry {
                    game_id,
                    entry_fee: 10,
                })
                .await
                .unwrap();
        }

        let jackpots = simulator.fixtures().unwrap().jackpots;
        assert_eq!(jackpots[0].current_pool, u64::MAX);
        assert_eq!(jackpots[0].participants, before[0].participants + 2);
        assert_eq!(jackpots[1], before[1]);
        assert_eq!(jackpots[2], before[2]);
    });
}

#[test]
fn test_deterministic_draws() {
    let draw = |seed| {
        let executor =
            deterministic::Runner::from(deterministic::Config::default().with_seed(seed));
        executor.start(|context| async move {
            let simulator = Simulator::new(context, Config::default());
            simulator.draw_prize(DEFAULT_USER_ID).await.unwrap()
        })
    };
    assert_eq!(draw(7), draw(7));
}
