//! Per-player cards: hand, personal pile, storage stacks.
//!
//! Every mutator is pure and returns a new `Player`; removal operations
//! return `None` when there is nothing at the requested position rather than
//! panicking. A player's functions only ever touch that player's own cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::config::{HAND_SIZE, STORAGE_STACKS};

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,

    /// 1-based ordinal (seat number at setup).
    pub number: u8,

    /// Avatar identifier for the UI.
    pub avatar: Option<String>,

    /// Driven by the AI scheduler.
    pub is_ai: bool,

    hand: Vector<Card>,

    /// Top = end of vector.
    personal_pile: Vector<Card>,

    /// Five independent LIFO stacks, top = end of each vector.
    storage: [Vector<Card>; STORAGE_STACKS],
}

impl Player {
    /// Create a player with no cards.
    #[must_use]
    pub fn new(name: impl Into<String>, number: u8) -> Self {
        Self {
            name: name.into(),
            number,
            avatar: None,
            is_ai: false,
            hand: Vector::new(),
            personal_pile: Vector::new(),
            storage: Default::default(),
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = avatar;
        self
    }

    #[must_use]
    pub fn with_ai(mut self, is_ai: bool) -> Self {
        self.is_ai = is_ai;
        self
    }

    /// Replace the hand.
    #[must_use]
    pub fn with_hand(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hand = cards.into_iter().collect();
        self
    }

    /// Replace the personal pile (last card is the top).
    #[must_use]
    pub fn with_personal_pile(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.personal_pile = cards.into_iter().collect();
        self
    }

    /// Replace one storage stack (last card is the top). Out-of-range indices
    /// are ignored.
    #[must_use]
    pub fn with_storage(mut self, index: usize, cards: impl IntoIterator<Item = Card>) -> Self {
        if let Some(stack) = self.storage.get_mut(index) {
            *stack = cards.into_iter().collect();
        }
        self
    }

    // === Hand ===

    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn hand_card(&self, index: usize) -> Option<&Card> {
        self.hand.get(index)
    }

    /// Append cards to the hand.
    #[must_use]
    pub fn add_to_hand(&self, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut next = self.clone();
        next.hand.extend(cards);
        next
    }

    /// Remove the hand card at `index`.
    #[must_use]
    pub fn remove_from_hand(&self, index: usize) -> Option<(Card, Self)> {
        if index >= self.hand.len() {
            return None;
        }
        let mut next = self.clone();
        let card = next.hand.remove(index);
        Some((card, next))
    }

    #[must_use]
    pub fn is_hand_full(&self) -> bool {
        self.hand.len() >= HAND_SIZE
    }

    #[must_use]
    pub fn is_hand_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Cards needed to bring the hand back to `HAND_SIZE`.
    #[must_use]
    pub fn cards_needed_to_fill(&self) -> usize {
        HAND_SIZE.saturating_sub(self.hand.len())
    }

    // === Personal pile ===

    #[must_use]
    pub fn personal_pile(&self) -> &Vector<Card> {
        &self.personal_pile
    }

    #[must_use]
    pub fn personal_pile_top(&self) -> Option<&Card> {
        self.personal_pile.back()
    }

    /// Remove the personal pile's top card.
    #[must_use]
    pub fn pop_personal_pile(&self) -> Option<(Card, Self)> {
        let mut next = self.clone();
        let card = next.personal_pile.pop_back()?;
        Some((card, next))
    }

    // === Storage ===

    #[must_use]
    pub fn storage(&self) -> &[Vector<Card>; STORAGE_STACKS] {
        &self.storage
    }

    #[must_use]
    pub fn storage_top(&self, index: usize) -> Option<&Card> {
        self.storage.get(index)?.back()
    }

    /// Push onto a storage stack. `None` when `index` is out of range.
    #[must_use]
    pub fn push_storage(&self, index: usize, card: Card) -> Option<Self> {
        if index >= STORAGE_STACKS {
            return None;
        }
        let mut next = self.clone();
        next.storage[index].push_back(card);
        Some(next)
    }

    /// Pop the top of a storage stack.
    #[must_use]
    pub fn pop_storage(&self, index: usize) -> Option<(Card, Self)> {
        if index >= STORAGE_STACKS {
            return None;
        }
        let mut next = self.clone();
        let card = next.storage[index].pop_back()?;
        Some((card, next))
    }

    /// Index of the first empty storage stack.
    #[must_use]
    pub fn first_empty_storage(&self) -> Option<usize> {
        self.storage.iter().position(Vector::is_empty)
    }

    /// Index of the shortest storage stack (first on ties).
    #[must_use]
    pub fn emptiest_storage(&self) -> usize {
        self.storage
            .iter()
            .enumerate()
            .min_by_key(|(i, s)| (s.len(), *i))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    // === Totals ===

    /// Personal pile emptied.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.personal_pile.is_empty()
    }

    /// Cards held across hand, personal pile, and storage.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
            + self.personal_pile.len()
            + self.storage.iter().map(Vector::len).sum::<usize>()
    }
}
