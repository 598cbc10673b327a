//! Engine error types.
//!
//! Every error is local and recoverable: the engine refuses the operation
//! and leaves the board unchanged. Callers decide what the player sees.

use thiserror::Error;

use super::card::CardId;
use super::config::PileId;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A move was requested that the move finder would reject.
    #[error("illegal move: {card} to {destination}")]
    IllegalMove { card: CardId, destination: PileId },

    /// Draw or redeal called when its precondition does not hold.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A card or pile outside the tracked set.
    #[error("not found: {0}")]
    NotFound(String),

    /// A deal that is not exactly the 52 distinct cards, or a malformed
    /// layout.
    #[error("invalid deck: {0}")]
    InvalidDeck(String),

    /// Rejected configuration value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
