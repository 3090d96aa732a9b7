//! Game constants and setup configuration.
//!
//! - Table constants (deck count, hand size, pile sizes)
//! - `PlayerConfig`: Per-seat setup options
//! - `AiDifficulty`: Which AI tier drives computer players
//! - `Seat`: Physical table positions, which fix turn order

use serde::{Deserialize, Serialize};

/// Number of standard 52-card decks shuffled into the stock.
pub const DECKS_IN_STOCK: usize = 3;

/// Total cards in play for one game.
pub const TOTAL_CARDS: usize = DECKS_IN_STOCK * 52;

/// Cards in a full hand.
pub const HAND_SIZE: usize = 5;

/// Cards dealt to each personal (21-)pile.
pub const PERSONAL_PILE_SIZE: usize = 21;

/// Storage stacks per player.
pub const STORAGE_STACKS: usize = 5;

/// Shared center piles.
pub const CENTER_PILES: usize = 4;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// A pile is complete once a card worth this value has been placed.
pub const PILE_COMPLETE_AFTER: u8 = 12;

/// Setup options for one player.
///
/// Omitted names and avatars get defaults derived from the seat number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub is_ai: bool,
}

impl PlayerConfig {
    /// A human player with default name and avatar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the avatar identifier.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Mark this seat as computer-controlled.
    #[must_use]
    pub fn ai(mut self) -> Self {
        self.is_ai = true;
        self
    }
}

/// AI skill tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Physical position at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Bottom,
    Left,
    Top,
    Right,
}

impl Seat {
    /// Seat for each player index, by player count.
    ///
    /// Player 0 always sits at the bottom; player 1 sits across (2 and 4
    /// players) or to the right (3 players).
    #[must_use]
    pub fn layout(player_count: usize) -> &'static [Seat] {
        match player_count {
            2 => &[Seat::Bottom, Seat::Top],
            3 => &[Seat::Bottom, Seat::Right, Seat::Top],
            4 => &[Seat::Bottom, Seat::Top, Seat::Left, Seat::Right],
            _ => &[],
        }
    }

    /// The seat that plays after this one (clockwise).
    #[must_use]
    pub fn clockwise(self) -> Seat {
        match self {
            Seat::Bottom => Seat::Left,
            Seat::Left => Seat::Top,
            Seat::Top => Seat::Right,
            Seat::Right => Seat::Bottom,
        }
    }
}
