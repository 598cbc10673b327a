//! Move legality.
//!
//! `MoveFinder` answers which piles a card may move to. Rules, in
//! priority order:
//!
//! 1. **Foundation**: the card has nothing stacked on it, and it is the
//!    next rank of its suit's foundation (an ace onto the empty pile).
//! 2. **Tableau**: the card (with its run) goes onto a face-up card one
//!    rank higher and of the opposite color, or a king onto an empty
//!    column.
//!
//! Only the top waste card and face-up tableau cards can move.
//! Destinations come back foundations first, then tableau columns left
//! to right, so first-fit mode prefers the foundation.

use crate::core::action::FindMode;
use crate::core::card::{CardId, KING};
use crate::core::config::{Location, PileId, PileKind};
use crate::core::error::EngineResult;
use crate::core::state::Board;

/// Read-only legality queries over a board.
#[derive(Clone, Copy, Debug)]
pub struct MoveFinder<'a> {
    board: &'a Board,
}

impl<'a> MoveFinder<'a> {
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Check if a card can be picked up at all.
    ///
    /// True for the top waste card and for face-up tableau cards.
    pub fn is_movable(&self, card: CardId) -> EngineResult<bool> {
        let location = self.board.locate(card)?;
        self.is_movable_at(card, location)
    }

    /// Legal destinations for `card`, in priority order.
    ///
    /// Empty if the card cannot move. `FindMode::FirstFit` stops at the
    /// first hit.
    pub fn destinations(&self, card: CardId, mode: FindMode) -> EngineResult<Vec<PileId>> {
        let location = self.board.locate(card)?;
        let mut found = Vec::new();
        if !self.is_movable_at(card, location)? {
            tracing::trace!(%card, "card is not movable");
            return Ok(found);
        }

        let candidates = PileId::foundations().chain(PileId::tableaus());
        for pile in candidates {
            if self.accepts(card, location, pile)? {
                found.push(pile);
                if mode == FindMode::FirstFit {
                    break;
                }
            }
        }

        tracing::trace!(%card, count = found.len(), "found destinations");
        Ok(found)
    }

    /// First legal destination, used for click-to-auto-move.
    pub fn first_destination(&self, card: CardId) -> EngineResult<Option<PileId>> {
        Ok(self
            .destinations(card, FindMode::FirstFit)?
            .into_iter()
            .next())
    }

    /// Check a single card/destination pairing.
    pub fn is_legal(&self, card: CardId, destination: PileId) -> EngineResult<bool> {
        let location = self.board.locate(card)?;
        // Reject out-of-range piles before anything else.
        destination.slot()?;
        Ok(self.is_movable_at(card, location)? && self.accepts(card, location, destination)?)
    }

    /// Every card that can currently be picked up: the waste top, then
    /// face-up tableau cards column by column, bottom to top.
    pub fn movable_cards(&self) -> EngineResult<Vec<CardId>> {
        let mut cards = Vec::new();
        cards.extend(self.board.top_of(PileId::Waste)?);
        for pile in PileId::tableaus() {
            cards.extend(
                self.board
                    .pile(pile)?
                    .iter()
                    .copied()
                    .filter(|&card| self.board.is_face_up(card)),
            );
        }
        Ok(cards)
    }

    fn is_movable_at(&self, card: CardId, location: Location) -> EngineResult<bool> {
        if !self.board.is_face_up(card) {
            return Ok(false);
        }
        Ok(match location.pile.kind() {
            PileKind::Waste => location.position + 1 == self.board.pile_len(PileId::Waste)?,
            PileKind::Tableau => true,
            PileKind::Stock | PileKind::Foundation => false,
        })
    }

    fn accepts(&self, card: CardId, from: Location, pile: PileId) -> EngineResult<bool> {
        if pile == from.pile {
            return Ok(false);
        }
        match pile.kind() {
            PileKind::Foundation => self.foundation_accepts(card, pile),
            PileKind::Tableau => self.tableau_accepts(card, pile),
            PileKind::Stock | PileKind::Waste => Ok(false),
        }
    }

    fn foundation_accepts(&self, card: CardId, pile: PileId) -> EngineResult<bool> {
        // A run never goes to a foundation.
        if !self.board.run_above(card)?.is_empty() {
            return Ok(false);
        }
        if pile.foundation_suit() != Some(card.suit()) {
            return Ok(false);
        }
        let len = self.board.pile_len(pile)?;
        if len + 1 != usize::from(card.rank()) {
            return Ok(false);
        }
        Ok(match self.board.top_of(pile)? {
            None => card.card().is_ace(),
            Some(top) => top.suit() == card.suit() && top.rank() + 1 == card.rank(),
        })
    }

    fn tableau_accepts(&self, card: CardId, pile: PileId) -> EngineResult<bool> {
        Ok(match self.board.top_of(pile)? {
            None => card.rank() == KING,
            Some(top) => {
                self.board.is_face_up(top)
                    && top.rank() == card.rank() + 1
                    && top.color() != card.color()
            }
        })
    }
}
