//! Renderer seam: the race observer capability.
//!
//! Front-ends (terminal cells, windowed graphics, headless logs) implement
//! `RaceObserver` and receive a fresh [`RaceSnapshot`] after every tick. The
//! engine knows nothing about which implementations exist; its side of the
//! seam is pure data out.

use crate::engine::game::Game;
use crate::engine::snapshot::RaceSnapshot;

/// A consumer of per-tick race state.
pub trait RaceObserver {
    /// Called with the current state: once before the first tick and once
    /// after every tick, including the finishing one.
    fn observe(&mut self, snapshot: &RaceSnapshot);
}

impl Game {
    /// Drive the race to completion, feeding every state to the observer.
    pub fn run<O: RaceObserver>(&mut self, observer: &mut O) {
        observer.observe(&self.snapshot());
        loop {
            let finished = self.advance();
            observer.observe(&self.snapshot());
            if finished {
                break;
            }
        }
    }
}
