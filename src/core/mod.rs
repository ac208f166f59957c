//! Core engine plumbing: RNG and errors.
//!
//! These are the domain-agnostic building blocks the race engine is built
//! on; nothing here knows about knights or track cells.

pub mod error;
pub mod rng;

pub use error::GameError;
pub use rng::GameRng;
