//! Core engine types: cards, piles, board state, moves, RNG, configuration.
//!
//! This module holds the data model. Legality and mutation live in
//! `rules`; the `Engine` facade in `games::klondike` ties them together.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;
pub mod action;
pub mod state;

pub use card::{Card, CardId, Color, Suit, ACE, DECK_SIZE, KING};
pub use config::{EngineConfig, Location, PileId, PileKind, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use error::{EngineError, EngineResult};
pub use rng::GameRng;
pub use action::{FindMode, Move, MoveOutcome};
pub use state::{Board, BoardBuilder, BoardView, CardView, PileView};
