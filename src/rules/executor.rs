//! Board mutation.
//!
//! `MoveExecutor` performs moves, stock draws, and redeals. Every
//! operation validates first and mutates second, so a failure leaves the
//! board exactly as it was.
//!
//! ## Stock cycle
//!
//! A draw turns cards over one at a time from the top of the stock onto
//! the waste, so the last card turned ends up on top. A redeal turns the
//! whole waste over back onto the stock, which restores the stock's
//! original order: the next pass produces the same draw groups.

use smallvec::SmallVec;

use super::finder::MoveFinder;
use super::win::WinChecker;
use crate::core::action::MoveOutcome;
use crate::core::card::CardId;
use crate::core::config::{PileId, PileKind};
use crate::core::error::{EngineError, EngineResult};
use crate::core::state::Board;

/// Mutating operations over a board.
#[derive(Debug)]
pub struct MoveExecutor<'a> {
    board: &'a mut Board,
}

impl<'a> MoveExecutor<'a> {
    #[must_use]
    pub fn new(board: &'a mut Board) -> Self {
        Self { board }
    }

    /// Move `card` and everything stacked on it to `destination`.
    ///
    /// The run keeps its order; the rest of the source pile is untouched.
    /// If the source was a tableau column whose new top is face-down, that
    /// card is turned face-up.
    ///
    /// The outcome's `won` flag is set when this move fills the last
    /// foundation.
    ///
    /// Fails with `IllegalMove` if the move finder rejects the pairing.
    pub fn execute(&mut self, card: CardId, destination: PileId) -> EngineResult<MoveOutcome> {
        let from = self.board.locate(card)?;
        if !MoveFinder::new(&*self.board).is_legal(card, destination)? {
            tracing::warn!(%card, %destination, "refused illegal move");
            return Err(EngineError::IllegalMove { card, destination });
        }

        let piles = self.board.piles_mut();
        let run = piles.split_off(from.pile, from.position)?;
        piles.extend(destination, &run)?;

        let mut flipped = None;
        if from.pile.kind() == PileKind::Tableau {
            if let Some(top) = self.board.top_of(from.pile)? {
                if !self.board.is_face_up(top) {
                    self.board.set_face_up(top, true);
                    flipped = Some(top);
                }
            }
        }

        tracing::debug!(
            %card,
            source = %from.pile,
            %destination,
            run = run.len(),
            flipped = ?flipped.map(|c| c.to_string()),
            "executed move"
        );

        Ok(MoveOutcome {
            source: Some(from.pile),
            destination: Some(destination),
            moved: SmallVec::from_vec(run),
            flipped,
            won: WinChecker::is_won(self.board),
        })
    }

    /// Turn up to `count` cards from the stock onto the waste.
    ///
    /// Fails with `InvalidState` if the stock is empty; the caller should
    /// redeal instead.
    pub fn draw_from_stock(&mut self, count: usize) -> EngineResult<MoveOutcome> {
        let len = self.board.pile_len(PileId::Stock)?;
        if len == 0 {
            return Err(EngineError::InvalidState("cannot draw from an empty stock".into()));
        }
        let taken = count.min(len);

        let piles = self.board.piles_mut();
        let mut drawn = piles.split_off(PileId::Stock, len - taken)?;
        // Turned one at a time: the old stock top lands first.
        drawn.reverse();
        piles.extend(PileId::Waste, &drawn)?;
        for &card in &drawn {
            self.board.set_face_up(card, true);
        }

        tracing::debug!(drawn = drawn.len(), stock = len - taken, "drew from stock");

        Ok(MoveOutcome {
            source: Some(PileId::Stock),
            destination: Some(PileId::Waste),
            moved: SmallVec::from_vec(drawn),
            flipped: None,
            won: false,
        })
    }

    /// Turn the whole waste back over onto the empty stock, face-down.
    ///
    /// Fails with `InvalidState` if the stock still has cards. With both
    /// piles empty this succeeds and moves nothing.
    pub fn redeal_from_waste(&mut self) -> EngineResult<MoveOutcome> {
        if self.board.pile_len(PileId::Stock)? != 0 {
            return Err(EngineError::InvalidState(
                "cannot redeal while the stock has cards".into(),
            ));
        }

        let piles = self.board.piles_mut();
        let mut cards = piles.split_off(PileId::Waste, 0)?;
        cards.reverse();
        piles.extend(PileId::Stock, &cards)?;
        for &card in &cards {
            self.board.set_face_up(card, false);
        }

        tracing::debug!(cards = cards.len(), "redealt waste onto stock");

        Ok(MoveOutcome {
            source: Some(PileId::Waste),
            destination: Some(PileId::Stock),
            moved: SmallVec::from_vec(cards),
            flipped: None,
            won: false,
        })
    }
}
