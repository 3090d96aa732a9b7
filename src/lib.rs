//! # twenty-one
//!
//! Rules engine and AI for "21", a shedding card game for 2-4 players.
//!
//! Each player races to empty a 21-card personal pile onto four shared
//! center piles that climb Ace to Queen, with Kings wild. Five storage
//! stacks per player hold cards for later.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: Every operation takes `&GameState` and returns
//!    a new `GameState`. Nothing is mutated in place.
//!
//! 2. **Rule Violations Are Data**: An illegal move returns the unchanged
//!    state with `last_event` set to `GameEvent::InvalidMove`. Only setup
//!    can fail with an `Err`.
//!
//! 3. **Deterministic**: The RNG lives inside the state, so a seed plus a
//!    move list reproduces a game exactly, including pile reshuffles.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, which keeps
//!   per-move snapshots and AI lookahead cheap.
//!
//! - **One Entry Point for Moves**: Human input, the AI and replays all go
//!   through `rules::apply_move`.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, piles, players, moves, events, RNG, configuration
//! - `rules`: Setup, turn operations, turn order
//! - `ai`: Easy/Medium/Hard policies and the turn planner
//! - `persist`: JSON and bincode save/restore
//! - `relay`: Turn-ownership guard for multiplayer snapshot relay

pub mod ai;
pub mod core;
pub mod persist;
pub mod relay;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AiDifficulty, Card, CardId, CardSource, CenterPile, Deck, Destination, GameEvent, GameRng,
    GameRngState, GameState, InvalidMoveReason, Move, MoveRecord, Player, PlayerConfig, Rank,
    Seat, SetupError, Suit,
};

pub use crate::rules::{
    apply_move, draw_card_from_stock_delayed, end_turn, force_end_turn_on_timeout,
    next_player_index, play_to_center, play_to_storage, setup_game,
};

pub use crate::ai::{
    execute_ai_move, find_best_move, plan_ai_turn, AiConfig, AiPolicy, AiTurnPlan, HardPolicy,
    SearchStats,
};

pub use crate::persist::PersistError;
pub use crate::relay::{RelayEnvelope, RelayError};
