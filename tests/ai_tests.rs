//! AI decision tests and full simulated games.

use im::Vector;
use twenty_one::ai::{find_best_move_with, plan_ai_turn_with, AiConfig, HardPolicy};
use twenty_one::{
    execute_ai_move, find_best_move, plan_ai_turn, setup_game, AiDifficulty, AiPolicy, Card,
    CardId, CardSource, GameRng, GameState, Move, Player, PlayerConfig, Rank, Suit,
};

fn card(id: u16, rank: u8) -> Card {
    Card::new(CardId::new(id), Suit::Diamonds, Rank::new(rank).unwrap())
}

const TIERS: [AiDifficulty; 3] = [AiDifficulty::Easy, AiDifficulty::Medium, AiDifficulty::Hard];

#[test]
fn test_scenario_f_hard_plays_personal_pile() {
    // Hand Aces and Twos would open long chains, but the personal-pile
    // Ace must still go first.
    let p0 = Player::new("A", 1)
        .with_hand([card(1, 1), card(2, 2), card(3, 1), card(4, 2), card(5, 3)])
        .with_personal_pile([card(6, 12), card(7, 1)]);
    let state = GameState {
        players: Vector::from(vec![p0, Player::new("B", 2).with_personal_pile([card(8, 9)])]),
        game_started: true,
        turn_number: 1,
        ..GameState::default()
    };
    let mut rng = GameRng::new(1);

    let mv = find_best_move(&state, AiDifficulty::Hard, &mut rng).unwrap();
    assert_eq!(mv.source(), Some(CardSource::PersonalPile));
}

#[test]
fn test_hard_always_takes_personal_pile_in_real_games() {
    let policy = HardPolicy::new(AiConfig::default());
    let mut rng = GameRng::new(0);

    for seed in 0..4 {
        let mut state = setup_game(2, &[], AiDifficulty::Hard, seed).unwrap();
        for _ in 0..120 {
            if !state.is_in_progress() {
                break;
            }
            let pile_play_open = state
                .legal_center_moves()
                .iter()
                .any(|mv| mv.source() == Some(CardSource::PersonalPile));
            let Some(mv) = policy.choose_move(&state, &mut rng) else {
                break;
            };
            if pile_play_open {
                assert_eq!(mv.source(), Some(CardSource::PersonalPile));
            }
            let next = execute_ai_move(&state, mv);
            assert!(!next.last_event.is_invalid(), "hard chose {mv:?}");
            state = next;
        }
    }
}

#[test]
fn test_every_tier_only_chooses_legal_moves() {
    let config = AiConfig::default();
    for difficulty in TIERS {
        let mut rng = GameRng::new(5);
        let mut state = setup_game(3, &[], difficulty, 77).unwrap();
        for _ in 0..150 {
            if !state.is_in_progress() {
                break;
            }
            let mv = find_best_move_with(&state, difficulty, &config, &mut rng).unwrap();
            let next = execute_ai_move(&state, mv);
            assert!(
                !next.last_event.is_invalid(),
                "{difficulty:?} chose illegal {mv:?}: {:?}",
                next.last_event
            );
            state = next;
        }
    }
}

#[test]
fn test_ai_is_deterministic_under_seed() {
    for difficulty in TIERS {
        let state = setup_game(4, &[], difficulty, 31).unwrap();
        let a = plan_ai_turn(&state, difficulty, &mut GameRng::new(9));
        let b = plan_ai_turn(&state, difficulty, &mut GameRng::new(9));
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.state, b.state);
    }
}

#[test]
fn test_plan_ends_with_turn_terminal_move() {
    for difficulty in TIERS {
        let state = setup_game(2, &[], difficulty, 3).unwrap();
        let plan = plan_ai_turn(&state, difficulty, &mut GameRng::new(2));

        let last = plan.moves.last().copied().unwrap();
        assert!(last.is_turn_terminal() || plan.state.game_over);
        assert!(plan.moves[..plan.moves.len() - 1]
            .iter()
            .all(|mv| matches!(mv, Move::PlayToCenter { .. })));
    }
}

/// Play whole turns with every seat on AI and check what must always hold.
fn simulate(player_count: usize, difficulty: AiDifficulty, seed: u64, turns: usize) -> GameState {
    let configs = vec![PlayerConfig::new().ai(); player_count];
    let config = AiConfig::default();
    let mut state = setup_game(player_count, &configs, difficulty, seed).unwrap();
    let mut rng = GameRng::new(seed ^ 0xA11CE);

    for _ in 0..turns {
        if !state.is_in_progress() {
            break;
        }
        let before = state.clone();
        let plan = plan_ai_turn_with(&before, difficulty, &config, &mut rng);
        state = plan.state;

        assert!(!plan.moves.is_empty());
        assert_eq!(state.card_count(), 156);
        for pile in &state.center_piles {
            assert!((1..=12).contains(&pile.expected_next()));
            assert_eq!(pile.len() + 1, usize::from(pile.expected_next()));
        }
        for (after, earlier) in state.players.iter().zip(before.players.iter()) {
            assert!(after.personal_pile().len() <= earlier.personal_pile().len());
        }
        if state.game_over {
            let winner = state.winner.unwrap();
            assert!(state.players[winner].personal_pile().is_empty());
        } else {
            assert_eq!(
                state.current_player,
                twenty_one::next_player_index(player_count, before.current_player)
            );
        }
    }
    state
}

#[test]
fn test_simulated_games_easy() {
    for player_count in 2..=4 {
        simulate(player_count, AiDifficulty::Easy, 100 + player_count as u64, 300);
    }
}

#[test]
fn test_simulated_games_medium() {
    for player_count in 2..=4 {
        simulate(player_count, AiDifficulty::Medium, 200 + player_count as u64, 300);
    }
}

#[test]
fn test_simulated_games_hard() {
    for player_count in 2..=4 {
        simulate(player_count, AiDifficulty::Hard, 300 + player_count as u64, 40);
    }
}

#[test]
fn test_center_plays_happen_over_a_game() {
    let state = simulate(2, AiDifficulty::Medium, 55, 200);
    let played: usize = state
        .history
        .iter()
        .filter(|r| matches!(r.mv, Move::PlayToCenter { .. }))
        .count();
    assert!(played > 0);
    assert!(state.turn_number > 1);
}
