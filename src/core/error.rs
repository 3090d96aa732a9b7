//! Error types.
//!
//! Only setup misuse is an `Err`. Rule violations during play are data: the
//! engine returns a state whose `last_event` is `GameEvent::InvalidMove`
//! carrying an [`InvalidMoveReason`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::CardSource;
use super::card::Card;
use super::config::{MAX_PLAYERS, MIN_PLAYERS};

/// Caller bug at game setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("invalid player count {count}: must be between {min} and {max}", min = MIN_PLAYERS, max = MAX_PLAYERS)]
    InvalidPlayerCount { count: usize },
    #[error("{given} player configs supplied for a {count}-player game")]
    TooManyPlayerConfigs { given: usize, count: usize },
}

/// Why a move was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidMoveReason {
    #[error("game is not in progress")]
    GameNotInProgress,
    #[error("no card at {from} index {index}")]
    NoCardAtSource { from: CardSource, index: usize },
    #[error("center pile index {index} is out of range")]
    InvalidPileIndex { index: usize },
    #[error("storage index {index} is out of range")]
    InvalidStorageIndex { index: usize },
    #[error("{card} cannot be placed on a pile expecting {expected}")]
    IllegalPlacement { card: Card, expected: u8 },
    #[error("storage is only allowed after a center play when the hand is full")]
    StorageLocked,
    #[error("cards cannot move between storage stacks")]
    StorageToStorage,
    #[error("personal pile cards can only be played to the center")]
    PersonalPileToStorage,
    #[error("at least one card must be played before ending the turn")]
    NothingPlayed,
    #[error("a full hand must be played down before ending the turn")]
    HandFull,
}
