//! Shared center piles, built Ace to Queen with Kings as wilds.
//!
//! The pile tracks `expected_next` explicitly instead of deriving it from its
//! length or its top card: a King stands in for whatever value was expected,
//! so the card after it must match the *tracked* value.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::config::PILE_COMPLETE_AFTER;

/// One of the four shared center piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterPile {
    cards: Vector<Card>,
    expected_next: u8,
}

impl Default for CenterPile {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of [`CenterPile::place`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The resulting pile (unchanged when `placed` is false).
    pub pile: CenterPile,
    /// Whether the card was accepted.
    pub placed: bool,
}

impl CenterPile {
    /// A fresh, empty pile expecting an Ace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vector::new(),
            expected_next: 1,
        }
    }

    /// The value a non-wild card must have to be placed next.
    #[must_use]
    pub fn expected_next(&self) -> u8 {
        self.expected_next
    }

    /// A Queen-equivalent has been placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.expected_next > PILE_COMPLETE_AFTER
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Whether `card` may legally go on this pile.
    #[must_use]
    pub fn can_place(&self, card: &Card) -> bool {
        if self.is_complete() {
            return false;
        }
        card.is_wild()
            || (self.is_empty() && card.is_start_rank())
            || card.value() == self.expected_next
    }

    /// Place `card` if legal.
    ///
    /// A wild advances the expected value by one; any other card sets it to
    /// `value + 1`.
    #[must_use]
    pub fn place(&self, card: Card) -> Placement {
        if !self.can_place(&card) {
            return Placement {
                pile: self.clone(),
                placed: false,
            };
        }

        let mut cards = self.cards.clone();
        cards.push_back(card);
        let expected_next = if card.is_wild() {
            self.expected_next + 1
        } else {
            card.value() + 1
        };

        Placement {
            pile: Self {
                cards,
                expected_next,
            },
            placed: true,
        }
    }

    /// Take every card off the pile, returning them with a fresh empty pile.
    #[must_use]
    pub fn collect_and_clear(&self) -> (Vec<Card>, CenterPile) {
        (self.cards.iter().copied().collect(), Self::new())
    }
}
