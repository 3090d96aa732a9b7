//! The rules state machine.
//!
//! `NotStarted → InProgress → Over`. Every operation takes the current
//! `GameState` by reference and returns the next one. Illegal moves come back
//! as a state whose `last_event` is `GameEvent::InvalidMove`; only
//! `setup_game` can return an `Err`.

pub mod setup;
pub mod turn;
pub mod turn_order;

pub use setup::setup_game;
pub use turn::{
    apply_move, draw_card_from_stock_delayed, end_turn, force_end_turn_on_timeout,
    play_to_center, play_to_storage,
};
pub use turn_order::next_player_index;
