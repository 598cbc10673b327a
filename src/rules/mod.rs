//! Klondike rules: legality, mutation, and win detection.
//!
//! The three facets read the board in dependency order:
//! - `MoveFinder`: legal destinations for a card
//! - `MoveExecutor`: performs certified moves, draws, and redeals
//! - `WinChecker`: all four foundations full
//!
//! `RulesEngine` is the seam the `Engine` facade drives them through.

pub mod engine;
pub mod executor;
pub mod finder;
pub mod win;

pub use engine::{GameStatus, RulesEngine};
pub use executor::MoveExecutor;
pub use finder::MoveFinder;
pub use win::WinChecker;
