//! Game state: the aggregate root.
//!
//! `GameState` is a persistent value. Rules operations take `&GameState` and
//! return a new one; the old value stays valid and unchanged, which gives
//! undo, replay and save for free and lets a UI keep reading a snapshot
//! while the AI computes on another.
//!
//! Uses `im` persistent data structures so each new state is O(1) to clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{CardSource, Move, MoveRecord};
use super::card::Card;
use super::config::{AiDifficulty, CENTER_PILES, STORAGE_STACKS};
use super::deck::Deck;
use super::event::GameEvent;
use super::pile::CenterPile;
use super::player::Player;
use super::rng::GameRngState;

/// Complete game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Table ===
    /// Players in setup order. Turn order is by seat, see `rules::turn_order`.
    pub players: Vector<Player>,

    pub center_piles: [CenterPile; CENTER_PILES],

    /// Shared draw pile.
    pub stock: Deck,

    // === Progression ===
    pub current_player: usize,

    pub game_started: bool,

    pub game_over: bool,

    pub winner: Option<usize>,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    pub cards_played_this_turn: u32,

    pub played_to_center_this_turn: bool,

    // === Bookkeeping ===
    pub last_event: GameEvent,

    pub ai_difficulty: AiDifficulty,

    /// RNG position for stock reshuffles.
    pub rng: GameRngState,

    /// Every successful move, in order.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// A game that has not been set up. Every play operation is a no-op on it.
    #[must_use]
    pub fn not_started() -> Self {
        Self::default()
    }

    /// Started and not yet won.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.game_started && !self.game_over
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }

    /// The card a move would take from `source`/`index` for the current
    /// player.
    #[must_use]
    pub fn card_at(&self, source: CardSource, index: usize) -> Option<&Card> {
        let player = self.current()?;
        match source {
            CardSource::Hand => player.hand_card(index),
            CardSource::PersonalPile => player.personal_pile_top(),
            CardSource::Storage => player.storage_top(index),
        }
    }

    /// `end_turn` would succeed.
    #[must_use]
    pub fn can_end_turn(&self) -> bool {
        self.is_in_progress()
            && self.cards_played_this_turn > 0
            && self.current().is_some_and(|p| !p.is_hand_full())
    }

    /// A hand-to-storage play is currently allowed for the current player.
    #[must_use]
    pub fn can_play_to_storage(&self) -> bool {
        self.is_in_progress()
            && self.current().is_some_and(|p| {
                !p.is_hand_empty() && (!self.played_to_center_this_turn || p.is_hand_full())
            })
    }

    /// Every legal center play for the current player.
    ///
    /// Ordered personal pile first, then storage tops (stack order, then pile
    /// order), then hand cards (hand order, then pile order).
    #[must_use]
    pub fn legal_center_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some(player) = self.current().filter(|_| self.is_in_progress()) else {
            return moves;
        };

        let mut push_for = |source: CardSource, index: usize, card: &Card| {
            for (pile_index, pile) in self.center_piles.iter().enumerate() {
                if pile.can_place(card) {
                    moves.push(Move::to_center(source, index, pile_index));
                }
            }
        };

        if let Some(top) = player.personal_pile_top() {
            push_for(CardSource::PersonalPile, 0, top);
        }
        for stack in 0..STORAGE_STACKS {
            if let Some(top) = player.storage_top(stack) {
                push_for(CardSource::Storage, stack, top);
            }
        }
        for (index, card) in player.hand().iter().enumerate() {
            push_for(CardSource::Hand, index, card);
        }

        moves
    }

    /// Total cards across stock, players and center piles. Constant for the
    /// lifetime of a started game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.players.iter().map(Player::card_count).sum::<usize>()
            + self.center_piles.iter().map(CenterPile::len).sum::<usize>()
    }
}
