//! The tagged event describing a state's most recent transition.
//!
//! Every engine operation sets `GameState::last_event`. Consumers (UI,
//! animation, sound) switch on the variant; failed moves are reported here
//! as `InvalidMove` instead of through `Result`.

use serde::{Deserialize, Serialize};

use super::action::{CardSource, Destination};
use super::card::Card;
use super::error::InvalidMoveReason;

/// Most recent transition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// No transition yet (unstarted game).
    #[default]
    None,
    GameStarted {
        starting_player: usize,
    },
    CardPlayed {
        player: usize,
        card: Card,
        source: CardSource,
        destination: Destination,
    },
    PileCompleted {
        pile_index: usize,
        cards_returned: usize,
    },
    HandRefilled {
        player: usize,
        cards_drawn: usize,
    },
    TurnEnded {
        player: usize,
        next_player: usize,
    },
    GameWon {
        winner: usize,
    },
    InvalidMove {
        reason: InvalidMoveReason,
        message: String,
    },
}

impl GameEvent {
    /// Build an `InvalidMove` event, filling `message` from the reason.
    #[must_use]
    pub fn invalid(reason: InvalidMoveReason) -> Self {
        let message = reason.to_string();
        GameEvent::InvalidMove { reason, message }
    }

    /// The transition was a rejected move.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, GameEvent::InvalidMove { .. })
    }

    /// The rejection reason, if this is an `InvalidMove`.
    #[must_use]
    pub fn invalid_reason(&self) -> Option<&InvalidMoveReason> {
        match self {
            GameEvent::InvalidMove { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
