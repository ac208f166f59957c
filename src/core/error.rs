//! Construction-time error type.
//!
//! The engine has exactly one fallible surface: building a race with
//! parameters outside the supported discrete ranges. Once a race exists,
//! `advance()` cannot fail (deck underflow is prevented structurally by
//! discard recycling).

use crate::engine::game::{MAX_LENGTH, MAX_PLAYERS, MIN_LENGTH, MIN_PLAYERS};

/// Rejected race configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Player count outside the supported range.
    PlayerCount(usize),
    /// Track length outside the supported range.
    RaceLength(usize),
    /// Provided player names do not match the player count.
    PlayerNames { expected: usize, got: usize },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::PlayerCount(n) => {
                write!(f, "unsupported player count {n} (supported: {MIN_PLAYERS}-{MAX_PLAYERS})")
            }
            GameError::RaceLength(n) => {
                write!(f, "unsupported race length {n} (supported: {MIN_LENGTH}-{MAX_LENGTH})")
            }
            GameError::PlayerNames { expected, got } => {
                write!(f, "expected {expected} player names, got {got}")
            }
        }
    }
}

impl std::error::Error for GameError {}
