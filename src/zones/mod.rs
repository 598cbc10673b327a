//! Pile storage for card locations.
//!
//! The Klondike layout is fixed, so unlike a general zone system every
//! pile exists from construction and is addressed by `PileId`.
//!
//! ## Key Types
//!
//! - `PileId`: Tagged pile address (from `core::config`)
//! - `Location`: Pile plus position within it
//! - `PileManager`: Pile contents and the card location index

pub mod manager;

pub use manager::PileManager;

// Re-export pile types from core for convenience
pub use crate::core::config::{Location, PileId, PileKind};
