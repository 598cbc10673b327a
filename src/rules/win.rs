//! Win detection.

use crate::core::card::RANKS_PER_SUIT;
use crate::core::config::PileId;
use crate::core::state::Board;

/// Pure win predicate over a board.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinChecker;

impl WinChecker {
    /// True when all four foundations hold a full suit.
    ///
    /// Since the card set is closed, this also means every other pile is
    /// empty.
    #[must_use]
    pub fn is_won(board: &Board) -> bool {
        PileId::foundations().all(|pile| {
            board
                .pile_len(pile)
                .is_ok_and(|len| len == usize::from(RANKS_PER_SUIT))
        })
    }
}
