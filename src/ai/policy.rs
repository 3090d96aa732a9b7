//! AI policies, one per difficulty tier.
//!
//! Policies are trait-based so the scheduler can treat the tiers uniformly:
//! - `EasyPolicy`: Mostly random center plays
//! - `MediumPolicy`: Greedy fixed priority
//! - `HardPolicy`: Heuristic evaluation with bounded lookahead (see `search`)
//!
//! A policy only reads the state it is given and returns a `Move`; moves are
//! applied through the same rules functions human input uses.

use smallvec::SmallVec;

use super::config::AiConfig;
use super::search::HardPolicy;
use crate::core::{AiDifficulty, GameRng, GameState, Move};

/// Candidate moves for one decision. Rarely more than sixteen.
pub type Candidates = SmallVec<[Move; 16]>;

/// Picks the next move for the current player.
pub trait AiPolicy: Send + Sync {
    /// Choose a move, or `None` when the game isn't in progress.
    fn choose_move(&self, state: &GameState, rng: &mut GameRng) -> Option<Move>;
}

/// Build the policy for a difficulty tier.
#[must_use]
pub fn policy_for(difficulty: AiDifficulty, config: &AiConfig) -> Box<dyn AiPolicy> {
    match difficulty {
        AiDifficulty::Easy => Box::new(EasyPolicy::new(config.easy_random_rate)),
        AiDifficulty::Medium => Box::new(MediumPolicy),
        AiDifficulty::Hard => Box::new(HardPolicy::new(config.clone())),
    }
}

impl AiDifficulty {
    /// This tier's policy with default parameters.
    #[must_use]
    pub fn policy(self) -> Box<dyn AiPolicy> {
        policy_for(self, &AiConfig::default())
    }
}

/// Legal center plays in priority order (personal pile, storage, hand).
#[must_use]
pub fn center_candidates(state: &GameState) -> Candidates {
    state.legal_center_moves().into_iter().collect()
}

// =============================================================================
// Easy
// =============================================================================

/// Plays a random center move most of the time, otherwise ends the turn as
/// soon as it may.
#[derive(Clone, Debug)]
pub struct EasyPolicy {
    random_rate: f64,
}

impl EasyPolicy {
    #[must_use]
    pub fn new(random_rate: f64) -> Self {
        Self { random_rate }
    }
}

impl Default for EasyPolicy {
    fn default() -> Self {
        Self::new(AiConfig::default().easy_random_rate)
    }
}

impl AiPolicy for EasyPolicy {
    fn choose_move(&self, state: &GameState, rng: &mut GameRng) -> Option<Move> {
        if !state.is_in_progress() {
            return None;
        }
        let center = center_candidates(state);

        if !center.is_empty() && rng.gen_bool(self.random_rate) {
            return rng.choose(&center).copied();
        }
        if state.can_end_turn() {
            return Some(Move::EndTurn);
        }
        if state.can_play_to_storage() {
            // Roomiest stack: the one with the fewest cards.
            let stack = state.current().map_or(0, |p| p.emptiest_storage());
            return Some(Move::hand_to_storage(0, stack));
        }
        if let Some(mv) = rng.choose(&center) {
            return Some(*mv);
        }
        Some(Move::ForceEndTurn)
    }
}

// =============================================================================
// Medium
// =============================================================================

/// Greedy: first legal center play in priority order, then end turn, then
/// store a card.
#[derive(Clone, Debug, Default)]
pub struct MediumPolicy;

impl AiPolicy for MediumPolicy {
    fn choose_move(&self, state: &GameState, _rng: &mut GameRng) -> Option<Move> {
        if !state.is_in_progress() {
            return None;
        }
        if let Some(mv) = center_candidates(state).first() {
            return Some(*mv);
        }
        if state.can_end_turn() {
            return Some(Move::EndTurn);
        }
        if state.can_play_to_storage() {
            let player = state.current()?;
            // Keep Kings in hand when there is anything else to store.
            let card = player
                .hand()
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_wild())
                .max_by_key(|(i, c)| (c.value(), std::cmp::Reverse(*i)))
                .map_or(0, |(i, _)| i);
            return Some(Move::hand_to_storage(card, player.emptiest_storage()));
        }
        Some(Move::ForceEndTurn)
    }
}
