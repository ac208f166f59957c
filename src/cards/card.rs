//! Card and suit values for the Spanish 48-card deck.
//!
//! A card is an immutable `(suit, rank)` pair with structural equality.
//! Ranks run 1-12; the three court ranks carry display significance only,
//! except rank 11 (the knight), which doubles as a competitor's token card.

use serde::{Deserialize, Serialize};

/// Suit of a Spanish-deck card. One suit per competitor in play.
///
/// `Suit::ALL` is the fixed enumeration order used when assigning suits to
/// competitors: a 2-player race uses golds and cups, a 3-player race adds
/// swords, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Golds,
    Cups,
    Swords,
    Clubs,
}

impl Suit {
    /// All four suits, in competitor-assignment order.
    pub const ALL: [Suit; 4] = [Suit::Golds, Suit::Cups, Suit::Swords, Suit::Clubs];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Golds => "golds",
            Suit::Cups => "cups",
            Suit::Swords => "swords",
            Suit::Clubs => "clubs",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single playing card.
///
/// Construction accepts any rank; deck builders are responsible for only
/// creating ranks 1-12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    /// Rank of the jack court card.
    pub const JACK: u8 = 10;
    /// Rank of the knight court card, used as a competitor's token.
    pub const KNIGHT: u8 = 11;
    /// Rank of the king court card.
    pub const KING: u8 = 12;

    /// Create a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Check whether this card belongs to the given suit.
    #[must_use]
    pub const fn matches_suit(self, suit: Suit) -> bool {
        self.suit as u8 == suit as u8
    }

    /// Court cards (jack, knight, king) get distinct artwork in renderers.
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.rank >= Self::JACK
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
