//! # steeplechase
//!
//! A deterministic, card-driven knight-racing engine.
//!
//! Each competitor is the knight card of one Spanish-deck suit, racing along
//! a short track of face-down cards. Drawn cards advance every knight of the
//! matching suit; track cards, revealed as the rearmost knight reaches them,
//! knock matching knights back. First knight past the end of the track wins.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: No display, locale, or input dependencies. The engine
//!    takes construction parameters and a single `advance` tick; renderers
//!    consume read-only snapshots.
//!
//! 2. **Deterministic**: All randomness flows through a seedable ChaCha8 RNG.
//!    The same seed and configuration replay the same race, tick for tick.
//!
//! 3. **Closed card system**: The draw pile, discard pile, track cells, and
//!    the card in hand always account for every card; an empty draw pile is
//!    replenished by reshuffling the discards, so a race never stalls.
//!
//! ## Modules
//!
//! - `cards`: Suits, cards, and piles
//! - `core`: RNG and error types
//! - `engine`: The race state machine, snapshots, and the observer seam
//!
//! ## Example
//!
//! ```
//! use steeplechase::GameBuilder;
//!
//! let mut game = GameBuilder::new()
//!     .players(2)
//!     .length(4)
//!     .player_names(["Ada", "Grace"])
//!     .build(42)
//!     .unwrap();
//!
//! while !game.advance() {}
//!
//! let winner = game.winners().next().unwrap();
//! assert!(winner.row() > game.length() as i32);
//! ```

pub mod cards;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, Suit};
pub use crate::core::{GameError, GameRng};
pub use crate::engine::{
    Game, GameBuilder, Knight, KnightView, RaceObserver, RaceSnapshot, StepCell, StepView,
};
pub use crate::engine::{MAX_LENGTH, MAX_PLAYERS, MIN_LENGTH, MIN_PLAYERS, RANKS_PER_SUIT};
