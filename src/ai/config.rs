//! AI configuration parameters.

use serde::{Deserialize, Serialize};

/// Weights for the hard tier's position evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Penalty per card left in the personal pile (primary term).
    pub personal_pile: f64,

    /// Reward per center play currently available to the player.
    pub available_move: f64,

    /// Penalty multiplier on the squared size of each storage stack.
    pub storage_depth: f64,

    /// Reward per point of each center pile's expected next value.
    pub pile_progress: f64,

    /// Reward per King held in hand.
    pub king_in_hand: f64,

    /// Reward when the personal pile top is playable right now.
    pub playable_pile_top: f64,

    /// Bonus on moves that play from the personal pile.
    pub personal_pile_source: f64,

    /// Bonus on moves that play from a storage top.
    pub storage_source: f64,

    /// Penalty for spending a King on a pile expecting less than
    /// `early_wild_threshold`.
    pub early_wild: f64,

    pub early_wild_threshold: u8,

    /// Score of a won position.
    pub win: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            personal_pile: 15.0,
            available_move: 3.0,
            storage_depth: 1.0,
            pile_progress: 0.3,
            king_in_hand: 4.0,
            playable_pile_top: 8.0,
            personal_pile_source: 12.0,
            storage_source: 4.0,
            early_wild: 6.0,
            early_wild_threshold: 10,
            win: 10_000.0,
        }
    }
}

/// AI configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Plies of own-turn center plays the hard tier looks ahead, counting
    /// the candidate move itself.
    pub search_depth: u32,

    /// Stop expanding siblings once one beats the best known score by this
    /// much. Performance only; does not change which rules apply.
    pub prune_margin: f64,

    /// Chance the easy tier plays a random center move when one exists.
    pub easy_random_rate: f64,

    /// Safety cap on moves in one planned AI turn.
    pub max_turn_steps: usize,

    pub weights: HeuristicWeights,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            search_depth: 2,
            prune_margin: 20.0,
            easy_random_rate: 0.6,
            max_turn_steps: 30,
            weights: HeuristicWeights::default(),
        }
    }
}

impl AiConfig {
    /// Set the lookahead depth.
    #[must_use]
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Set the pruning margin.
    #[must_use]
    pub fn with_prune_margin(mut self, margin: f64) -> Self {
        self.prune_margin = margin;
        self
    }

    /// Set the easy tier's random-play rate.
    #[must_use]
    pub fn with_easy_random_rate(mut self, rate: f64) -> Self {
        self.easy_random_rate = rate;
        self
    }

    /// Set the per-turn move cap.
    #[must_use]
    pub fn with_max_turn_steps(mut self, steps: usize) -> Self {
        self.max_turn_steps = steps;
        self
    }

    /// Replace the evaluation weights.
    #[must_use]
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }
}
