//! Read-only state snapshot consumed by renderers.
//!
//! A snapshot is a deep copy of everything a front-end may draw: competitor
//! positions, the revealed/hidden state of every track cell, and the card in
//! hand. Face-down cell cards are withheld entirely rather than flagged, so
//! display code cannot peek at unrevealed penalties.
//!
//! All types here are serde-serializable so snapshots can cross process or
//! FFI boundaries to out-of-process renderers unchanged.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// One competitor as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnightView {
    /// The competitor's suit (selects token artwork and lane).
    pub suit: Suit,
    /// Rank of the token card (always the knight rank).
    pub rank: u8,
    /// Current row; 0 is the starting line.
    pub row: i32,
    /// Display name. May be empty.
    pub name: String,
}

/// One track cell as a renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepView {
    /// Whether the cell's card has been turned face up.
    pub revealed: bool,
    /// The cell's card, present only once revealed.
    pub card: Option<Card>,
}

/// Full drawable race state at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSnapshot {
    /// Track length in cells.
    pub length: usize,
    /// Whether any competitor has passed the finish line.
    pub finished: bool,
    /// Competitors in suit-assignment order.
    pub knights: Vec<KnightView>,
    /// Track cells; index 0 is cell 1.
    pub cells: Vec<StepView>,
    /// The card currently in hand, if any.
    pub top_card: Option<Card>,
}
