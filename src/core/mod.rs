//! Core types: cards, deck, piles, players, state, moves, events, RNG,
//! configuration.
//!
//! Everything here is a plain value. The rules that move cards between these
//! values live in `crate::rules`.

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod event;
pub mod pile;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{CardSource, Destination, Move, MoveRecord};
pub use card::{Card, CardId, Rank, Suit};
pub use config::{AiDifficulty, PlayerConfig, Seat};
pub use deck::Deck;
pub use error::{InvalidMoveReason, SetupError};
pub use event::GameEvent;
pub use pile::{CenterPile, Placement};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
