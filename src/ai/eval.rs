//! Position evaluation for the hard tier.
//!
//! Scores a state from one player's point of view. Higher is better. The
//! personal pile size dominates; the remaining terms separate positions with
//! the same pile size.

use rustc_hash::FxHashMap;

use super::config::HeuristicWeights;
use crate::core::config::STORAGE_STACKS;
use crate::core::{Card, CenterPile, GameState, Player};

/// Score `state` for `player`.
#[must_use]
pub fn evaluate(state: &GameState, player: usize, weights: &HeuristicWeights) -> f64 {
    if state.winner == Some(player) {
        return weights.win;
    }
    let Some(p) = state.player(player) else {
        return 0.0;
    };
    let piles = &state.center_piles;

    let pile_size = p.personal_pile().len() as f64;
    let available = center_plays(p, piles) as f64;
    let storage_penalty: f64 = p
        .storage()
        .iter()
        .map(|stack| (stack.len() * stack.len()) as f64)
        .sum();
    let progress: f64 = piles.iter().map(|pile| f64::from(pile.expected_next())).sum();
    let kings = p.hand().iter().filter(|c| c.is_wild()).count() as f64;
    let top_playable = p
        .personal_pile_top()
        .is_some_and(|top| playable_anywhere(top, piles));

    let mut score = -weights.personal_pile * pile_size
        + weights.available_move * available
        - weights.storage_depth * storage_penalty
        + weights.pile_progress * progress
        + weights.king_in_hand * kings;
    if top_playable {
        score += weights.playable_pile_top;
    }
    score
}

/// Whether `card` fits on any center pile.
#[must_use]
pub fn playable_anywhere(card: &Card, piles: &[CenterPile]) -> bool {
    piles.iter().any(|pile| pile.can_place(card))
}

/// Number of (card, pile) center plays open to `player`.
#[must_use]
pub fn center_plays(player: &Player, piles: &[CenterPile]) -> usize {
    let count = |card: &Card| piles.iter().filter(|pile| pile.can_place(card)).count();

    let from_pile = player.personal_pile_top().map_or(0, count);
    let from_storage: usize = (0..STORAGE_STACKS)
        .filter_map(|i| player.storage_top(i))
        .map(count)
        .sum();
    let from_hand: usize = player.hand().iter().map(count).sum();

    from_pile + from_storage + from_hand
}

/// How many of the player's reachable cards (personal pile top, storage
/// tops, hand) have each value.
#[must_use]
pub fn reachable_values(player: &Player) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    let reachable = player
        .personal_pile_top()
        .into_iter()
        .chain((0..STORAGE_STACKS).filter_map(|i| player.storage_top(i)))
        .chain(player.hand().iter());
    for card in reachable {
        *counts.entry(card.value()).or_insert(0) += 1;
    }
    counts
}
