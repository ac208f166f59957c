//! Ordered card pile with stack draws and targeted removal.
//!
//! A `Deck` serves two roles in a race: the draw pile (created full and
//! shuffled, drained by draws) and the discard pile (created empty,
//! accumulating retired cards until it is recycled back into the draw pile).
//!
//! Draw order is last-in-first-out over the internal sequence. Targeted
//! removal (`draw_exact`) is a linear scan, fine for at most 48 cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::GameRng;

/// Backing storage sized for a full 4-suit deck; piles never outgrow it.
type CardVec = SmallVec<[Card; 48]>;

/// An ordered pile of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    suits: SmallVec<[Suit; 4]>,
    cards: CardVec,
}

impl Deck {
    /// Create a full deck: `ranks_per_suit` cards (ranks 1..=`ranks_per_suit`)
    /// for each of the given suits, in rank-major setup order.
    #[must_use]
    pub fn new(suits: &[Suit], ranks_per_suit: u8) -> Self {
        let mut cards = CardVec::new();
        for rank in 1..=ranks_per_suit {
            for &suit in suits {
                cards.push(Card::new(suit, rank));
            }
        }
        Self {
            suits: suits.iter().copied().collect(),
            cards,
        }
    }

    /// Create an empty pile (a fresh discard pile).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            suits: SmallVec::new(),
            cards: CardVec::new(),
        }
    }

    /// Uniformly permute the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the most recently inserted card.
    ///
    /// Returns `None` if the pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return the unique card matching both suit and rank.
    ///
    /// Returns `None` without mutating if no such card is present.
    pub fn draw_exact(&mut self, suit: Suit, rank: u8) -> Option<Card> {
        let target = Card::new(suit, rank);
        let idx = self.cards.iter().position(|&c| c == target)?;
        Some(self.cards.remove(idx))
    }

    /// Append a card unless a structurally equal card is already present.
    pub fn insert(&mut self, card: Card) {
        if !self.contains(card) {
            self.cards.push(card);
        }
    }

    /// Number of cards left in the pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check whether a structurally equal card is present.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The suits this deck was built with.
    #[must_use]
    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deck_size() {
        let deck = Deck::new(&Suit::ALL, 12);
        assert_eq!(deck.remaining(), 48);

        let deck = Deck::new(&Suit::ALL[..2], 12);
        assert_eq!(deck.remaining(), 24);
    }

    #[test]
    fn test_empty_pile() {
        let mut pile = Deck::empty();
        assert!(pile.is_empty());
        assert_eq!(pile.draw(), None);
        assert!(pile.suits().is_empty());
    }

    #[test]
    fn test_draw_is_lifo() {
        let mut deck = Deck::new(&[Suit::Golds], 3);
        // Setup order is rank-major: 1, 2, 3. Draws come off the end.
        assert_eq!(deck.draw(), Some(Card::new(Suit::Golds, 3)));
        assert_eq!(deck.draw(), Some(Card::new(Suit::Golds, 2)));
        assert_eq!(deck.draw(), Some(Card::new(Suit::Golds, 1)));
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_draw_exact() {
        let mut deck = Deck::new(&Suit::ALL[..2], 12);
        let card = deck.draw_exact(Suit::Cups, Card::KNIGHT);
        assert_eq!(card, Some(Card::new(Suit::Cups, 11)));
        assert_eq!(deck.remaining(), 23);
        assert!(!deck.contains(Card::new(Suit::Cups, 11)));
    }

    #[test]
    fn test_draw_exact_missing_does_not_mutate() {
        let mut deck = Deck::new(&[Suit::Golds], 3);
        assert_eq!(deck.draw_exact(Suit::Cups, 2), None);
        assert_eq!(deck.draw_exact(Suit::Golds, 7), None);
        assert_eq!(deck.remaining(), 3);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut pile = Deck::empty();
        let card = Card::new(Suit::Swords, 5);
        pile.insert(card);
        pile.insert(card);
        assert_eq!(pile.remaining(), 1);

        pile.insert(Card::new(Suit::Swords, 6));
        assert_eq!(pile.remaining(), 2);
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let mut deck = Deck::new(&Suit::ALL, 12);
        let before = deck.clone();
        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_eq!(deck.remaining(), 48);
        for rank in 1..=12 {
            for suit in Suit::ALL {
                assert!(deck.contains(Card::new(suit, rank)));
            }
        }
        // 48! orderings; a fixed-point shuffle would indicate a broken RNG.
        assert_ne!(deck, before);
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let mut a = Deck::new(&Suit::ALL, 12);
        let mut b = Deck::new(&Suit::ALL, 12);
        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));
        assert_eq!(a, b);
    }
}
