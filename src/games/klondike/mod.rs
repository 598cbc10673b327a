//! Klondike solitaire.
//!
//! - 52 cards, 7 tableau columns dealt as a triangle
//! - Foundations built up by suit from the ace
//! - Tableau built down in alternating colors; only kings on empty columns
//! - Stock turned three at a time (configurable), unlimited redeals

mod game;

pub use game::{Engine, KlondikeRules};
