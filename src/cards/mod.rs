//! Card system: suits, cards, and piles.
//!
//! ## Key Types
//!
//! - `Suit`: One of the four Spanish-deck suits; one suit per competitor
//! - `Card`: Immutable `(suit, rank)` value with structural equality
//! - `Deck`: Ordered pile supporting stack draws, targeted removal,
//!   idempotent reinsertion, and seeded shuffles

pub mod card;
pub mod deck;

pub use card::{Card, Suit};
pub use deck::Deck;
