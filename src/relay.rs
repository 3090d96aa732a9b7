//! Multiplayer relay guard.
//!
//! The relay forwards whole `GameState` snapshots between clients. It only
//! checks that the sender owns the turn being played and that the snapshot
//! isn't older than the one it already holds. Rule legality is left to each
//! client's own engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::GameState;

/// A snapshot sent by one client after making a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayEnvelope {
    /// Seat index of the sending player.
    pub sender: usize,

    /// Sender-side message counter, for ordering on the receiving end.
    pub sequence: u64,

    /// State after the sender's move.
    pub state: GameState,
}

/// Why the relay refused to forward a snapshot.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("game is not in progress")]
    GameNotInProgress,

    #[error("player {sender} sent a move on player {expected}'s turn")]
    NotYourTurn { expected: usize, sender: usize },

    #[error("snapshot is from turn {snapshot_turn}, relay is at turn {current_turn}")]
    StaleSnapshot { current_turn: u32, snapshot_turn: u32 },

    #[error("malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RelayEnvelope {
    #[must_use]
    pub fn new(sender: usize, sequence: u64, state: GameState) -> Self {
        Self {
            sender,
            sequence,
            state,
        }
    }

    /// Encode for the wire.
    ///
    /// # Errors
    ///
    /// `RelayError::Malformed` if serialization fails.
    pub fn to_json(&self) -> Result<String, RelayError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from the wire.
    ///
    /// # Errors
    ///
    /// `RelayError::Malformed` if the text isn't a valid envelope.
    pub fn from_json(json: &str) -> Result<Self, RelayError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Check that `envelope` may replace the relay's `current` state.
///
/// # Errors
///
/// - `GameNotInProgress` if the relay's game hasn't started or is over
/// - `NotYourTurn` if the sender isn't the player whose turn it is
/// - `StaleSnapshot` if the snapshot's turn is behind the relay's
pub fn authorize(current: &GameState, envelope: &RelayEnvelope) -> Result<(), RelayError> {
    if !current.is_in_progress() {
        return Err(RelayError::GameNotInProgress);
    }
    if envelope.sender != current.current_player {
        debug!(
            expected = current.current_player,
            sender = envelope.sender,
            "relay refused out-of-turn snapshot"
        );
        return Err(RelayError::NotYourTurn {
            expected: current.current_player,
            sender: envelope.sender,
        });
    }
    if envelope.state.turn_number < current.turn_number {
        return Err(RelayError::StaleSnapshot {
            current_turn: current.turn_number,
            snapshot_turn: envelope.state.turn_number,
        });
    }
    Ok(())
}
