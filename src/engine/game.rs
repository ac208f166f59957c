//! Race engine: the turn loop over knights, step cells, and the draw pile.
//!
//! ## Rules
//!
//! Each competitor is a knight card (rank 11) of its own suit, starting at
//! row 0 and racing to pass row `length`. Every tick either:
//!
//! - resolves a pending step cell: all knights matching the cell card's suit
//!   retreat one row, then a new top card is drawn; or
//! - retires the current top card to the discard pile, advancing all knights
//!   matching its suit, and then either reveals the step cell at the rearmost
//!   knight's row (arming a retreat for the next tick) or draws a new top
//!   card.
//!
//! Step cells are indexed by the rearmost knight (`min_row`): the cell a
//! trailing competitor is about to step onto is the one that fires. Each cell
//! reveals once and penalizes once. Penalties are aggregate: every knight of
//! the matching suit retreats, not just the one at `min_row`.
//!
//! The draw pile and discard pile form a closed system; when the draw pile
//! empties it is replenished by reshuffling the discard pile, so `advance`
//! never runs out of cards.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Suit};
use crate::core::{GameError, GameRng};
use crate::engine::snapshot::{KnightView, RaceSnapshot, StepView};

/// Minimum supported competitor count.
pub const MIN_PLAYERS: usize = 2;
/// Maximum supported competitor count (one per suit).
pub const MAX_PLAYERS: usize = 4;
/// Minimum supported track length.
pub const MIN_LENGTH: usize = 4;
/// Maximum supported track length.
pub const MAX_LENGTH: usize = 7;
/// Cards per suit in the deck.
pub const RANKS_PER_SUIT: u8 = 12;

/// A competitor: its token card, current row, and display name.
///
/// The token is the rank-11 card of the competitor's assigned suit, fixed
/// for the whole race. `row` starts at 0 and the race is won by exceeding
/// the track length (overshoot past the finish line is allowed).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knight {
    token: Card,
    row: i32,
    name: String,
}

impl Knight {
    /// The knight card marking this competitor.
    #[must_use]
    pub fn token(&self) -> Card {
        self.token
    }

    /// The competitor's assigned suit.
    #[must_use]
    pub fn suit(&self) -> Suit {
        self.token.suit
    }

    /// Current track position. 0 is the starting line; never negative.
    #[must_use]
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Display name chosen by the driver. May be empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One track cell holding a face-down card that can trigger a retreat.
///
/// Lifecycle: `hidden` (face down) -> `pending` (revealed, penalty armed)
/// -> resolved. Cells never re-arm; the card stays in the cell permanently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCell {
    card: Card,
    hidden: bool,
    pending: bool,
}

impl StepCell {
    /// Whether the cell's card is still face down.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the cell is revealed but its retreat has not yet fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The cell's card, once revealed. `None` while face down.
    #[must_use]
    pub fn revealed_card(&self) -> Option<Card> {
        if self.hidden {
            None
        } else {
            Some(self.card)
        }
    }
}

/// Builder for a race.
///
/// ```
/// use steeplechase::GameBuilder;
///
/// let game = GameBuilder::new()
///     .players(2)
///     .length(4)
///     .player_names(["Ada", "Grace"])
///     .build(42)
///     .unwrap();
/// assert_eq!(game.knights().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    players: Option<usize>,
    length: Option<usize>,
    names: Option<Vec<String>>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the competitor count (2-4). Defaults to 4.
    #[must_use]
    pub fn players(mut self, players: usize) -> Self {
        self.players = Some(players);
        self
    }

    /// Set the track length (4-7). Defaults to 7.
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Set one display name per competitor. Defaults to empty names.
    #[must_use]
    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Build a race with a seeded RNG, for reproducible runs.
    pub fn build(self, seed: u64) -> Result<Game, GameError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build a race with OS entropy, for regular play.
    pub fn build_from_entropy(self) -> Result<Game, GameError> {
        self.build_with_rng(GameRng::from_entropy())
    }

    fn build_with_rng(self, rng: GameRng) -> Result<Game, GameError> {
        let players = self.players.unwrap_or(MAX_PLAYERS);
        let length = self.length.unwrap_or(MAX_LENGTH);

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(GameError::PlayerCount(players));
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GameError::RaceLength(length));
        }

        let names = match self.names {
            Some(names) if names.len() != players => {
                return Err(GameError::PlayerNames {
                    expected: players,
                    got: names.len(),
                });
            }
            Some(names) => names,
            None => vec![String::new(); players],
        };

        Ok(Game::with_parts(players, length, names, rng))
    }
}

/// A race in progress.
///
/// The engine exclusively owns its piles, knights, and track cells; the only
/// mutation is [`Game::advance`]. Everything else is read-only observation.
#[derive(Debug, PartialEq)]
pub struct Game {
    rng: GameRng,
    deck: Deck,
    discard: Deck,
    length: usize,
    knights: Vec<Knight>,
    steps: Vec<StepCell>,
    /// Row of the rearmost knight; 0 means no cell is addressable yet.
    min_row: i32,
    top_card: Option<Card>,
}

impl Game {
    fn with_parts(players: usize, length: usize, names: Vec<String>, mut rng: GameRng) -> Self {
        let suits = &Suit::ALL[..players];
        let mut deck = Deck::new(suits, RANKS_PER_SUIT);
        deck.shuffle(&mut rng);

        let knights = suits
            .iter()
            .zip(names)
            .map(|(&suit, name)| Knight {
                token: deck
                    .draw_exact(suit, Card::KNIGHT)
                    .expect("a full deck holds every knight card"),
                row: 0,
                name,
            })
            .collect();

        let steps = (0..length)
            .map(|_| StepCell {
                card: deck
                    .draw()
                    .expect("a full deck covers every track cell"),
                hidden: true,
                pending: false,
            })
            .collect();

        Self {
            rng,
            deck,
            discard: Deck::empty(),
            length,
            knights,
            steps,
            min_row: 0,
            top_card: None,
        }
    }

    /// Apply one state-transition tick.
    ///
    /// Returns `true` once any knight's row strictly exceeds the track
    /// length. The driver renders the state after every tick, including the
    /// finishing one, and stops calling once `true` is observed.
    pub fn advance(&mut self) -> bool {
        let front = self.min_row;
        if front > 0 && self.steps[front as usize - 1].pending {
            let cell = &mut self.steps[front as usize - 1];
            cell.pending = false;
            let suit = cell.card.suit;
            debug!("cell {front} resolves: {suit} knights retreat");
            self.shift_knights(suit, -1);
            self.top_card = Some(self.draw_recycling());
        } else {
            if let Some(card) = self.top_card.take() {
                self.discard.insert(card);
                debug!("{card} advances the {} knights", card.suit);
                self.shift_knights(card.suit, 1);
            }
            // The advance above may have moved the rearmost knight onto a
            // fresh cell, so re-read min_row before deciding reveal vs draw.
            let front = self.min_row;
            if front > 0 && self.steps[front as usize - 1].hidden {
                let cell = &mut self.steps[front as usize - 1];
                cell.hidden = false;
                cell.pending = true;
                debug!("cell {front} reveals {}", cell.card);
            } else {
                self.top_card = Some(self.draw_recycling());
            }
        }

        self.is_finished()
    }

    /// Move every knight of `suit` by `delta` rows and refresh the cache of
    /// the rearmost row.
    fn shift_knights(&mut self, suit: Suit, delta: i32) {
        for knight in &mut self.knights {
            if knight.token.matches_suit(suit) {
                knight.row += delta;
            }
        }
        self.min_row = self.knights.iter().map(|k| k.row).min().unwrap_or(0);
    }

    /// Draw from the pile, reshuffling the discards back in first if the
    /// draw pile is empty.
    fn draw_recycling(&mut self) -> Card {
        if self.deck.is_empty() {
            debug!("draw pile empty, recycling {} discards", self.discard.remaining());
            std::mem::swap(&mut self.deck, &mut self.discard);
            self.deck.shuffle(&mut self.rng);
        }
        self.deck
            .draw()
            .expect("draw and discard piles cannot both be empty mid-race")
    }

    /// Whether any knight has passed the finish line.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.knights.iter().any(|k| k.row > self.length as i32)
    }

    /// Knights past the finish line, in competitor order.
    pub fn winners(&self) -> impl Iterator<Item = &Knight> {
        let finish = self.length as i32;
        self.knights.iter().filter(move |k| k.row > finish)
    }

    /// Competitor count.
    #[must_use]
    pub fn players(&self) -> usize {
        self.knights.len()
    }

    /// Track length in cells.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// All competitors, in suit-assignment order.
    #[must_use]
    pub fn knights(&self) -> &[Knight] {
        &self.knights
    }

    /// All track cells; index 0 is track cell 1.
    #[must_use]
    pub fn steps(&self) -> &[StepCell] {
        &self.steps
    }

    /// The card currently in hand, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.top_card
    }

    /// Row of the rearmost knight.
    #[must_use]
    pub fn min_row(&self) -> i32 {
        self.min_row
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Cards in the discard pile awaiting recycling.
    #[must_use]
    pub fn discard_remaining(&self) -> usize {
        self.discard.remaining()
    }

    /// The seed this race was built with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Deep-copy snapshot of everything a renderer may show.
    ///
    /// Face-down cell cards are withheld, so the snapshot can be handed to
    /// untrusted display code without leaking upcoming penalties.
    #[must_use]
    pub fn snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            length: self.length,
            finished: self.is_finished(),
            knights: self
                .knights
                .iter()
                .map(|k| KnightView {
                    suit: k.token.suit,
                    rank: k.token.rank,
                    row: k.row,
                    name: k.name.clone(),
                })
                .collect(),
            cells: self
                .steps
                .iter()
                .map(|s| StepView {
                    revealed: !s.hidden,
                    card: s.revealed_card(),
                })
                .collect(),
            top_card: self.top_card,
        }
    }
}
