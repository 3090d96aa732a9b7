//! Hard tier: heuristic scoring with bounded lookahead.
//!
//! A playable personal-pile top is always played first: emptying that pile
//! wins, so no other move can be better. Otherwise every legal center play
//! is simulated through the rules engine and scored as the best evaluation
//! reachable within `search_depth` plies of further center plays, plus a
//! bonus for where the card came from.

use std::time::Instant;

use tracing::trace;

use super::config::AiConfig;
use super::eval::{evaluate, playable_anywhere, reachable_values};
use super::policy::{center_candidates, AiPolicy};
use super::stats::SearchStats;
use crate::core::{CardSource, GameRng, GameState, Move};
use crate::rules::apply_move;

/// Lookahead search policy.
#[derive(Clone, Debug, Default)]
pub struct HardPolicy {
    config: AiConfig,
}

impl HardPolicy {
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    /// Choose a move and report what the search did.
    #[must_use]
    pub fn search(&self, state: &GameState) -> (Option<Move>, SearchStats) {
        let start = Instant::now();
        let mut stats = SearchStats::new();
        let choice = self.decide(state, &mut stats);
        stats.time_us = start.elapsed().as_micros() as u64;
        (choice, stats)
    }

    fn decide(&self, state: &GameState, stats: &mut SearchStats) -> Option<Move> {
        if !state.is_in_progress() {
            return None;
        }
        let candidates = center_candidates(state);

        if let Some(mv) = candidates
            .iter()
            .find(|mv| mv.source() == Some(CardSource::PersonalPile))
        {
            return Some(*mv);
        }

        if !candidates.is_empty() {
            let player = state.current_player;
            let mut best: Option<(Move, f64)> = None;
            for &mv in &candidates {
                let score = self.score_candidate(state, mv, player, stats);
                trace!(?mv, score, "candidate scored");
                if best.map_or(true, |(_, b)| score > b) {
                    best = Some((mv, score));
                }
            }
            return best.map(|(mv, _)| mv);
        }

        if state.can_end_turn() {
            return Some(Move::EndTurn);
        }
        if state.can_play_to_storage() {
            return self.bury_move(state);
        }
        Some(Move::ForceEndTurn)
    }

    fn score_candidate(
        &self,
        state: &GameState,
        mv: Move,
        player: usize,
        stats: &mut SearchStats,
    ) -> f64 {
        let weights = &self.config.weights;
        stats.record_candidate();

        let child = apply_move(state, mv);
        let mut score = self.lookahead(&child, player, 1, stats);

        if let Move::PlayToCenter {
            source,
            source_index,
            pile_index,
        } = mv
        {
            score += match source {
                CardSource::PersonalPile => weights.personal_pile_source,
                CardSource::Storage => weights.storage_source,
                CardSource::Hand => 0.0,
            };

            let wild = state
                .card_at(source, source_index)
                .is_some_and(|card| card.is_wild());
            let early = state
                .center_piles
                .get(pile_index)
                .is_some_and(|pile| pile.expected_next() < weights.early_wild_threshold);
            if wild && early {
                score -= weights.early_wild;
            }
        }
        score
    }

    /// Best evaluation reachable from `state` with the remaining plies.
    ///
    /// Only the searching player's own center plays are expanded; once the
    /// turn passes or the game ends, the position is scored as it stands.
    fn lookahead(&self, state: &GameState, player: usize, depth: u32, stats: &mut SearchStats) -> f64 {
        let here = evaluate(state, player, &self.config.weights);
        if depth >= self.config.search_depth
            || !state.is_in_progress()
            || state.current_player != player
        {
            return here;
        }

        let mut best = here;
        for mv in center_candidates(state) {
            let child = apply_move(state, mv);
            stats.record_node(depth + 1);
            let value = self.lookahead(&child, player, depth + 1, stats);
            if value > best + self.config.prune_margin {
                stats.record_prune();
                return value;
            }
            best = best.max(value);
        }
        best
    }

    /// Store the least useful hand card in the emptiest stack.
    ///
    /// Picks the highest rank among cards unplayable anywhere; ties go to the
    /// card whose successor value the player can reach least often. Kings
    /// are only stored when nothing else is left.
    fn bury_move(&self, state: &GameState) -> Option<Move> {
        let player = state.current()?;
        let piles = &state.center_piles;
        let successors = reachable_values(player);
        let blocks = |value: u8| successors.get(&(value + 1)).copied().unwrap_or(0);

        let hand: Vec<_> = player.hand().iter().copied().enumerate().collect();
        let unplayable: Vec<_> = hand
            .iter()
            .filter(|(_, c)| !c.is_wild() && !playable_anywhere(c, piles))
            .copied()
            .collect();
        let non_wild: Vec<_> = hand.iter().filter(|(_, c)| !c.is_wild()).copied().collect();
        let pool = [unplayable, non_wild, hand]
            .into_iter()
            .find(|cards| !cards.is_empty())?;

        let (index, _) = pool.iter().copied().fold(None, |best, (i, card)| match best {
            Some((_, b)) if !is_less_useful(card.value(), blocks(card.value()), b) => best,
            _ => Some((i, (card.value(), blocks(card.value())))),
        })?;

        Some(Move::hand_to_storage(index, player.emptiest_storage()))
    }
}

/// `value`/`blocks` is a better card to bury than `than`.
fn is_less_useful(value: u8, blocks: usize, than: (u8, usize)) -> bool {
    let (best_value, best_blocks) = than;
    value > best_value || (value == best_value && blocks < best_blocks)
}

impl AiPolicy for HardPolicy {
    fn choose_move(&self, state: &GameState, _rng: &mut GameRng) -> Option<Move> {
        let (choice, stats) = self.search(state);
        trace!(
            candidates = stats.candidates,
            nodes = stats.nodes_expanded,
            pruned = stats.branches_pruned,
            prune_rate = stats.prune_rate(),
            nodes_per_candidate = stats.avg_nodes_per_candidate(),
            nodes_per_sec = stats.nodes_per_second(),
            time_us = stats.time_us,
            "hard search finished"
        );
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, CardId, CenterPile, Player, Rank, Suit};
    use im::Vector;

    fn card(id: u16, rank: u8) -> Card {
        Card::new(CardId::new(id), Suit::Spades, Rank::new(rank).unwrap())
    }

    fn pile_expecting(expected: u8, first_id: u16) -> CenterPile {
        (1..expected).fold(CenterPile::new(), |pile, rank| {
            pile.place(card(first_id + u16::from(rank), rank)).pile
        })
    }

    fn table(p0: Player) -> GameState {
        GameState {
            players: Vector::from(vec![p0, Player::new("B", 2).with_personal_pile([card(900, 9)])]),
            game_started: true,
            turn_number: 1,
            ..GameState::default()
        }
    }

    #[test]
    fn test_plays_personal_pile_first() {
        let p0 = Player::new("A", 1)
            .with_hand([card(1, 13), card(2, 1)])
            .with_personal_pile([card(3, 9), card(4, 1)]);
        let state = table(p0);

        let (mv, stats) = HardPolicy::default().search(&state);
        assert_eq!(mv, Some(Move::to_center(CardSource::PersonalPile, 0, 0)));
        assert_eq!(stats.candidates, 0);
    }

    #[test]
    fn test_prefers_move_that_unblocks_pile() {
        // Pile 0 expects 4. Playing the hand 4 makes the personal 5 playable.
        let p0 = Player::new("A", 1)
            .with_hand([card(1, 1), card(2, 4)])
            .with_personal_pile([card(3, 9), card(4, 5)]);
        let mut state = table(p0);
        state.center_piles[0] = pile_expecting(4, 100);

        let (mv, stats) = HardPolicy::default().search(&state);
        assert_eq!(mv, Some(Move::to_center(CardSource::Hand, 1, 0)));
        assert!(stats.candidates >= 2);
        assert!(stats.nodes_expanded >= stats.candidates);
    }

    #[test]
    fn test_avoids_early_king() {
        // Either card starts an empty pile; the King should be saved.
        let p0 = Player::new("A", 1)
            .with_hand([card(1, 13), card(2, 1)])
            .with_personal_pile([card(3, 9)]);
        let state = table(p0);
        let policy = HardPolicy::new(AiConfig::default().with_search_depth(1));

        let (mv, _) = policy.search(&state);
        assert_eq!(mv.and_then(|m| m.source()), Some(CardSource::Hand));
        assert!(matches!(mv, Some(Move::PlayToCenter { source_index: 1, .. })));
    }

    #[test]
    fn test_ends_turn_without_center_moves() {
        let p0 = Player::new("A", 1)
            .with_hand([card(1, 9)])
            .with_personal_pile([card(3, 9)]);
        let mut state = table(p0);
        state.cards_played_this_turn = 1;
        state.played_to_center_this_turn = true;

        assert_eq!(HardPolicy::default().search(&state).0, Some(Move::EndTurn));
    }

    #[test]
    fn test_buries_least_useful_card() {
        // Nothing is playable on empty piles except Aces and Kings.
        let p0 = Player::new("A", 1)
            .with_hand([card(1, 5), card(2, 10), card(3, 7), card(4, 10)])
            .with_personal_pile([card(5, 11)])
            .with_storage(0, [card(6, 2)]);
        let state = table(p0);

        // Both 10s rank highest and tie on reachable Jacks; first one wins.
        assert_eq!(
            HardPolicy::default().search(&state).0,
            Some(Move::hand_to_storage(1, 1))
        );
    }

    #[test]
    fn test_bury_keeps_kings() {
        let p0 = Player::new("A", 1)
            .with_hand([card(1, 13), card(2, 5), card(3, 13)])
            .with_personal_pile([card(5, 3)]);
        let mut state = table(p0);
        // Complete every pile so even Kings have nowhere to go.
        for (p, pile) in state.center_piles.iter_mut().enumerate() {
            *pile = pile_expecting(13, 200 + 20 * p as u16);
        }

        assert_eq!(
            HardPolicy::default().search(&state).0,
            Some(Move::hand_to_storage(1, 0))
        );
    }

    #[test]
    fn test_is_less_useful() {
        assert!(is_less_useful(10, 3, (9, 0)));
        assert!(is_less_useful(9, 0, (9, 1)));
        assert!(!is_less_useful(9, 1, (9, 1)));
        assert!(!is_less_useful(8, 0, (9, 5)));
    }

    #[test]
    fn test_pruning_counts() {
        let p0 = Player::new("A", 1)
            .with_hand([card(1, 1), card(2, 2), card(3, 3), card(4, 4)])
            .with_personal_pile([card(5, 9), card(6, 5)]);
        let state = table(p0);
        let policy = HardPolicy::new(AiConfig::default().with_prune_margin(0.0));

        let (mv, stats) = policy.search(&state);
        assert!(mv.is_some());
        assert!(stats.branches_pruned > 0);
        assert!(stats.max_depth >= 2);
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let p0 = Player::new("A", 1)
            .with_hand([card(1, 1), card(2, 2)])
            .with_personal_pile([card(5, 9)]);
        let state = table(p0);
        let snapshot = state.clone();

        let _ = HardPolicy::default().search(&state);
        assert_eq!(state, snapshot);
    }
}
