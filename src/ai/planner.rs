//! Driving the AI: single decisions and whole turns.
//!
//! Moves chosen here are applied with `rules::apply_move`, the same entry
//! point human input uses.

use tracing::{debug, warn};

use super::config::AiConfig;
use super::policy::{policy_for, AiPolicy};
use crate::core::{AiDifficulty, GameRng, GameState, Move};
use crate::rules::{apply_move, draw_card_from_stock_delayed};

/// Result of planning one AI turn.
#[derive(Clone, Debug)]
pub struct AiTurnPlan {
    /// Moves in the order they were applied, for replay or animation.
    pub moves: Vec<Move>,

    /// State after the last move.
    pub state: GameState,
}

/// Best move for the current player at `difficulty`, using default AI
/// parameters.
#[must_use]
pub fn find_best_move(
    state: &GameState,
    difficulty: AiDifficulty,
    rng: &mut GameRng,
) -> Option<Move> {
    find_best_move_with(state, difficulty, &AiConfig::default(), rng)
}

/// Like `find_best_move`, with explicit AI parameters.
#[must_use]
pub fn find_best_move_with(
    state: &GameState,
    difficulty: AiDifficulty,
    config: &AiConfig,
    rng: &mut GameRng,
) -> Option<Move> {
    policy_for(difficulty, config).choose_move(state, rng)
}

/// Apply an AI-chosen move through the rules engine.
#[must_use]
pub fn execute_ai_move(state: &GameState, mv: Move) -> GameState {
    apply_move(state, mv)
}

/// Play out the current player's whole turn at `difficulty`.
#[must_use]
pub fn plan_ai_turn(state: &GameState, difficulty: AiDifficulty, rng: &mut GameRng) -> AiTurnPlan {
    plan_ai_turn_with(state, difficulty, &AiConfig::default(), rng)
}

/// Like `plan_ai_turn`, with explicit AI parameters.
#[must_use]
pub fn plan_ai_turn_with(
    state: &GameState,
    difficulty: AiDifficulty,
    config: &AiConfig,
    rng: &mut GameRng,
) -> AiTurnPlan {
    let policy = policy_for(difficulty, config);
    plan_turn(state, policy.as_ref(), config.max_turn_steps, rng)
}

/// Play out a turn with any policy.
///
/// Tops the hand up from the stock first, then asks the policy for moves
/// until one ends the turn or the game. A move the rules reject is replaced
/// by a forced end of turn. After `max_steps` moves the turn is forced to
/// end as well.
#[must_use]
pub fn plan_turn(
    state: &GameState,
    policy: &dyn AiPolicy,
    max_steps: usize,
    rng: &mut GameRng,
) -> AiTurnPlan {
    let mut moves = Vec::new();
    if !state.is_in_progress() {
        return AiTurnPlan {
            moves,
            state: state.clone(),
        };
    }

    let player = state.current_player;
    let mut current = draw_card_from_stock_delayed(state, player);

    for _ in 0..max_steps {
        let Some(mv) = policy.choose_move(&current, rng) else {
            break;
        };

        let next = execute_ai_move(&current, mv);
        if next.last_event.is_invalid() {
            warn!(player, ?mv, event = ?next.last_event, "AI chose an invalid move, forcing end of turn");
            moves.push(Move::ForceEndTurn);
            current = apply_move(&current, Move::ForceEndTurn);
            return AiTurnPlan {
                moves,
                state: current,
            };
        }

        moves.push(mv);
        current = next;
        if mv.is_turn_terminal() || !current.is_in_progress() || current.current_player != player {
            debug!(player, moves = moves.len(), "AI turn finished");
            return AiTurnPlan {
                moves,
                state: current,
            };
        }
    }

    if current.is_in_progress() && current.current_player == player {
        warn!(player, max_steps, "AI turn hit the step cap, forcing end of turn");
        moves.push(Move::ForceEndTurn);
        current = apply_move(&current, Move::ForceEndTurn);
    }
    AiTurnPlan {
        moves,
        state: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, CardId, CardSource, Deck, Player, Rank, Suit};
    use crate::rules::setup_game;
    use im::Vector;

    fn card(id: u16, rank: u8) -> Card {
        Card::new(CardId::new(id), Suit::Hearts, Rank::new(rank).unwrap())
    }

    struct Fixed(Move);

    impl AiPolicy for Fixed {
        fn choose_move(&self, _state: &GameState, _rng: &mut GameRng) -> Option<Move> {
            Some(self.0)
        }
    }

    #[test]
    fn test_plan_ends_turn_for_every_tier() {
        for difficulty in [AiDifficulty::Easy, AiDifficulty::Medium, AiDifficulty::Hard] {
            let state = setup_game(3, &[], difficulty, 21).unwrap();
            let mut rng = GameRng::new(4);
            let plan = plan_ai_turn(&state, difficulty, &mut rng);

            assert!(!plan.moves.is_empty());
            assert!(plan.state.current_player != state.current_player || plan.state.game_over);
            assert_eq!(plan.state.card_count(), 156);
        }
    }

    #[test]
    fn test_plan_refills_hand_first() {
        let p0 = Player::new("A", 1)
            .with_hand([card(1, 9)])
            .with_personal_pile([card(2, 8)]);
        let state = GameState {
            players: Vector::from(vec![p0, Player::new("B", 2).with_personal_pile([card(3, 8)])]),
            stock: Deck::from_cards((10..20).map(|id| card(id, 6))),
            game_started: true,
            turn_number: 1,
            ..GameState::default()
        };
        let mut rng = GameRng::new(1);

        let plan = plan_ai_turn(&state, AiDifficulty::Medium, &mut rng);
        // Four cards drawn, then one stored: nothing fits the empty piles.
        assert_eq!(plan.state.stock.len(), 6);
        assert_eq!(plan.moves.len(), 1);
        assert!(matches!(plan.moves[0], Move::PlayToStorage { .. }));
        assert_eq!(plan.state.players[0].hand().len(), 4);
    }

    #[test]
    fn test_plan_not_in_progress() {
        let state = GameState::not_started();
        let mut rng = GameRng::new(1);
        let plan = plan_ai_turn(&state, AiDifficulty::Hard, &mut rng);
        assert!(plan.moves.is_empty());
        assert_eq!(plan.state, state);
    }

    #[test]
    fn test_invalid_ai_move_is_forced() {
        let state = setup_game(2, &[], AiDifficulty::Medium, 8).unwrap();
        let mut rng = GameRng::new(1);
        let bogus = Fixed(Move::to_center(CardSource::Hand, 99, 0));

        let plan = plan_turn(&state, &bogus, 30, &mut rng);
        assert_eq!(plan.moves, vec![Move::ForceEndTurn]);
        assert_ne!(plan.state.current_player, state.current_player);
    }

    #[test]
    fn test_step_cap_forces_end() {
        let state = setup_game(2, &[], AiDifficulty::Medium, 8).unwrap();
        let mut rng = GameRng::new(1);

        let plan = plan_turn(&state, &Fixed(Move::EndTurn), 0, &mut rng);
        assert_eq!(plan.moves, vec![Move::ForceEndTurn]);
        assert_ne!(plan.state.current_player, state.current_player);
    }

    #[test]
    fn test_execute_matches_apply() {
        let state = setup_game(2, &[], AiDifficulty::Hard, 2).unwrap();
        let mut rng = GameRng::new(1);
        let mv = find_best_move(&state, AiDifficulty::Hard, &mut rng).unwrap();
        assert_eq!(execute_ai_move(&state, mv), apply_move(&state, mv));
    }
}
