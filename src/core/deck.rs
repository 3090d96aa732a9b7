//! The shared stock: an ordered LIFO stack of cards.
//!
//! The top of the deck is the END of the sequence. All operations are pure:
//! they return a new `Deck` and leave the receiver untouched. Backed by
//! `im::Vector`, so those copies share structure.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Rank, Suit};
use super::rng::GameRng;

/// Ordered stack of cards, top = last element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// An empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build `decks` standard 52-card decks in a fixed order with ids
    /// `0..decks*52`.
    #[must_use]
    pub fn standard(decks: usize) -> Self {
        let mut cards = Vector::new();
        let mut next_id = 0u16;
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::all() {
                    cards.push_back(Card::new(CardId::new(next_id), suit, rank));
                    next_id += 1;
                }
            }
        }
        Self { cards }
    }

    /// Build a deck from explicit cards (last card is the top).
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Return a uniformly shuffled copy.
    #[must_use]
    pub fn shuffled(&self, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Draw up to `n` cards from the top.
    ///
    /// Never fails on shortage: returns fewer cards when the deck runs out.
    /// Drawn cards are returned in draw order (first drawn first).
    #[must_use]
    pub fn draw(&self, n: usize) -> (Vec<Card>, Deck) {
        let take = n.min(self.cards.len());
        let mut rest = self.cards.clone();
        let top = rest.split_off(self.cards.len() - take);
        let drawn = top.iter().rev().copied().collect();
        (drawn, Self { cards: rest })
    }

    /// Return cards to the top of the deck (last given ends on top).
    #[must_use]
    pub fn add_cards(&self, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut next = self.cards.clone();
        next.extend(cards);
        Self { cards: next }
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
