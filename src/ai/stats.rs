//! Lookahead search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one hard-tier search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Root candidate moves scored.
    pub candidates: u32,

    /// Positions simulated (root candidates plus lookahead children).
    pub nodes_expanded: u32,

    /// Sibling lists cut short by the pruning margin.
    pub branches_pruned: u32,

    /// Deepest ply reached.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a root candidate and the position it leads to.
    pub fn record_candidate(&mut self) {
        self.candidates += 1;
        self.nodes_expanded += 1;
        self.max_depth = self.max_depth.max(1);
    }

    /// Count a lookahead position at `depth` plies below the root.
    pub fn record_node(&mut self, depth: u32) {
        self.nodes_expanded += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn record_prune(&mut self) {
        self.branches_pruned += 1;
    }

    /// Share of scored candidates whose lookahead was cut short.
    #[must_use]
    pub fn prune_rate(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            f64::from(self.branches_pruned) / f64::from(self.candidates)
        }
    }

    /// Positions expanded per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.nodes_expanded) * 1_000_000.0 / self.time_us as f64
        }
    }

    /// Average positions expanded per root candidate.
    #[must_use]
    pub fn avg_nodes_per_candidate(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            f64::from(self.nodes_expanded) / f64::from(self.candidates)
        }
    }
}
