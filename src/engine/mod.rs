//! Race engine: state machine, snapshots, and the observer seam.
//!
//! ## Key Types
//!
//! - `GameBuilder`: Validated race construction (players, length, names)
//! - `Game`: The race itself; one mutating operation, `advance`
//! - `Knight` / `StepCell`: Competitor and track-cell records
//! - `RaceSnapshot`: Deep-copy drawable state for renderers
//! - `RaceObserver`: Per-tick snapshot consumer implemented by front-ends

pub mod game;
pub mod observer;
pub mod snapshot;

pub use game::{Game, GameBuilder, Knight, StepCell};
pub use game::{MAX_LENGTH, MAX_PLAYERS, MIN_LENGTH, MIN_PLAYERS, RANKS_PER_SUIT};
pub use observer::RaceObserver;
pub use snapshot::{KnightView, RaceSnapshot, StepView};
