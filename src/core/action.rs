//! Moves a player (human or AI) can submit, and the history record kept for
//! replay.

use serde::{Deserialize, Serialize};

/// Where a played card comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSource {
    Hand,
    PersonalPile,
    Storage,
}

impl std::fmt::Display for CardSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSource::Hand => write!(f, "hand"),
            CardSource::PersonalPile => write!(f, "personal pile"),
            CardSource::Storage => write!(f, "storage"),
        }
    }
}

/// Where a played card went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Center(usize),
    Storage(usize),
}

/// A complete move.
///
/// `source_index` is the hand index for `Hand`, the stack index for
/// `Storage`, and ignored for `PersonalPile` (only the top card is playable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    PlayToCenter {
        source: CardSource,
        source_index: usize,
        pile_index: usize,
    },
    PlayToStorage {
        source: CardSource,
        source_index: usize,
        storage_index: usize,
    },
    EndTurn,
    /// Timer expiry: end the turn by whatever means is available.
    ForceEndTurn,
}

impl Move {
    /// Convenience constructor for a hand-to-storage move.
    #[must_use]
    pub const fn hand_to_storage(hand_index: usize, storage_index: usize) -> Self {
        Move::PlayToStorage {
            source: CardSource::Hand,
            source_index: hand_index,
            storage_index,
        }
    }

    /// Convenience constructor for a center play.
    #[must_use]
    pub const fn to_center(source: CardSource, source_index: usize, pile_index: usize) -> Self {
        Move::PlayToCenter {
            source,
            source_index,
            pile_index,
        }
    }

    /// Whether a successful application of this move always ends the turn.
    #[must_use]
    pub fn is_turn_terminal(&self) -> bool {
        !matches!(self, Move::PlayToCenter { .. })
    }

    /// The card source, for card-playing moves.
    #[must_use]
    pub fn source(&self) -> Option<CardSource> {
        match self {
            Move::PlayToCenter { source, .. } | Move::PlayToStorage { source, .. } => Some(*source),
            Move::EndTurn | Move::ForceEndTurn => None,
        }
    }
}

/// A successful move with metadata for history tracking.
///
/// Used for replay, animation sequencing, and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: usize,

    /// The move made.
    pub mv: Move,

    /// Turn number when the move was made.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: usize, mv: Move, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            mv,
            turn,
            sequence,
        }
    }
}
