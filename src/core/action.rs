//! Moves and change notifications.
//!
//! A `Move` is a transient proposal: a source card plus a destination
//! pile. The move finder produces them and the executor consumes them
//! immediately; nothing is recorded.
//!
//! Every mutation returns a `MoveOutcome` describing what changed, so a
//! renderer can redraw only the affected piles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::CardId;
use super::config::PileId;

/// A proposed transfer of a card (and everything stacked on it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The card being moved. Cards above it travel with it.
    pub card: CardId,

    /// Destination pile.
    pub destination: PileId,
}

impl Move {
    #[must_use]
    pub const fn new(card: CardId, destination: PileId) -> Self {
        Self { card, destination }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.card, self.destination)
    }
}

/// How many destinations the move finder should collect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindMode {
    /// Every legal destination, foundations first.
    #[default]
    All,
    /// Stop at the first legal destination (click-to-auto-move).
    FirstFit,
}

/// What a successful mutation changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Pile the cards left.
    pub source: Option<PileId>,

    /// Pile the cards arrived on.
    pub destination: Option<PileId>,

    /// Cards that changed pile, in the order they now sit (bottom first).
    pub moved: SmallVec<[CardId; 13]>,

    /// Card turned face-up on the source pile after the move.
    pub flipped: Option<CardId>,

    /// Set when this mutation completed the game.
    pub won: bool,
}

impl MoveOutcome {
    /// Piles whose contents or top card changed.
    ///
    /// A face-up flip on the source pile is reported through `flipped`;
    /// the source pile is already in this list.
    #[must_use]
    pub fn changed_piles(&self) -> SmallVec<[PileId; 2]> {
        let mut piles = SmallVec::new();
        if self.moved.is_empty() {
            return piles;
        }
        piles.extend(self.source);
        if let Some(destination) = self.destination {
            if self.source != Some(destination) {
                piles.push(destination);
            }
        }
        piles
    }

    /// Check if nothing moved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(raw: u8) -> CardId {
        CardId::new(raw).unwrap()
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(card(0), PileId::Foundation(0));
        assert_eq!(mv.to_string(), "AC -> Foundation(0)");
    }

    #[test]
    fn test_changed_piles() {
        let outcome = MoveOutcome {
            source: Some(PileId::Tableau(2)),
            destination: Some(PileId::Tableau(5)),
            moved: SmallVec::from_slice(&[card(10), card(22)]),
            flipped: Some(card(3)),
            won: false,
        };

        assert_eq!(
            outcome.changed_piles().as_slice(),
            &[PileId::Tableau(2), PileId::Tableau(5)]
        );
    }

    #[test]
    fn test_empty_outcome_changes_nothing() {
        let outcome = MoveOutcome {
            source: Some(PileId::Waste),
            destination: Some(PileId::Stock),
            ..MoveOutcome::default()
        };

        assert!(outcome.is_empty());
        assert!(outcome.changed_piles().is_empty());
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(card(12), PileId::Tableau(0));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
