//! # klondike-engine
//!
//! Rule engine and game-state model for Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **Pure state**: The engine knows cards and piles, never pixels,
//!    timers, or animation. A presentation layer calls in and redraws
//!    from the returned change notifications.
//!
//! 2. **No ambient globals**: Each `Engine` owns one `Board`. Independent
//!    games and deterministic tests come from injecting the shuffle.
//!
//! 3. **All-or-nothing mutation**: Every operation validates before it
//!    mutates. A refused operation leaves the board untouched.
//!
//! ## Modules
//!
//! - `core`: Cards, pile addresses, board state, moves, RNG, configuration
//! - `zones`: Pile storage and the card location index
//! - `rules`: Move finder, move executor, win checker
//! - `games`: The Klondike rule set and `Engine` facade

pub mod core;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardBuilder, BoardView, Card, CardId, CardView, Color, EngineConfig, EngineError,
    EngineResult, FindMode, GameRng, Location, Move, MoveOutcome, PileId, PileKind, PileView,
    Suit,
};

pub use crate::zones::PileManager;

pub use crate::rules::{GameStatus, MoveExecutor, MoveFinder, RulesEngine, WinChecker};

pub use crate::games::klondike::{Engine, KlondikeRules};
