//! Rules engine trait for solitaire rule sets.
//!
//! A rule set implements `RulesEngine` to define:
//! - Which destinations are legal for a card
//! - How moves and stock turns modify the board
//! - When the game is won

use crate::core::action::{FindMode, Move, MoveOutcome};
use crate::core::card::CardId;
use crate::core::config::PileId;
use crate::core::error::EngineResult;
use crate::core::state::Board;

/// Game progress.
///
/// A won game is not locked: the board still answers queries. Only a new
/// deal leaves the won state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
}

impl GameStatus {
    /// Check if the game is won.
    #[must_use]
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_destinations`: Return empty if the card cannot move
/// - `apply_move`: Must refuse anything `legal_destinations` would not
///   offer, leaving the board untouched
/// - `status`: Pure; called after every successful move
pub trait RulesEngine {
    /// Legal destinations for a card, in priority order.
    fn legal_destinations(
        &self,
        board: &Board,
        card: CardId,
        mode: FindMode,
    ) -> EngineResult<Vec<PileId>>;

    /// Move a card (and its run) to a destination.
    fn apply_move(&self, board: &mut Board, mv: Move) -> EngineResult<MoveOutcome>;

    /// Turn cards from the stock onto the waste.
    fn draw(&self, board: &mut Board) -> EngineResult<MoveOutcome>;

    /// Turn the waste back over onto the stock.
    fn redeal(&self, board: &mut Board) -> EngineResult<MoveOutcome>;

    /// Current game progress.
    fn status(&self, board: &Board) -> GameStatus;

    /// Cards that can currently be picked up.
    fn movable_cards(&self, board: &Board) -> EngineResult<Vec<CardId>>;

    // === Convenience Methods ===

    /// Enumerate all legal moves on the board.
    ///
    /// Default implementation pairs each movable card with each of its
    /// destinations.
    fn legal_moves(&self, board: &Board) -> EngineResult<Vec<Move>> {
        let mut moves = Vec::new();
        for card in self.movable_cards(board)? {
            for destination in self.legal_destinations(board, card, FindMode::All)? {
                moves.push(Move::new(card, destination));
            }
        }
        Ok(moves)
    }

    /// Check if any move is available without touching the stock.
    fn has_legal_move(&self, board: &Board) -> EngineResult<bool> {
        for card in self.movable_cards(board)? {
            if !self
                .legal_destinations(board, card, FindMode::FirstFit)?
                .is_empty()
            {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
