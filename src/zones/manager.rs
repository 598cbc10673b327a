//! Pile manager for card locations and movement.
//!
//! The `PileManager` owns the ordered contents of all 13 piles plus an
//! index from each card to its `Location`. It supports:
//! - O(1) card lookup by ID
//! - Splitting a run off the top of a pile
//! - Appending a run to a pile
//!
//! Cards only ever leave a pile from the top, so the positions of the
//! cards left behind never change. The index is updated for the moved
//! cards alone.

use rustc_hash::FxHashMap;

use crate::core::card::CardId;
use crate::core::config::{Location, PileId};
use crate::core::error::{EngineError, EngineResult};

/// Manages card locations across piles.
///
/// ## Usage
///
/// ```
/// use klondike_engine::core::{CardId, Location, PileId};
/// use klondike_engine::zones::PileManager;
///
/// let mut manager = PileManager::new();
/// let ace = CardId::new(0).unwrap();
/// let two = CardId::new(1).unwrap();
///
/// manager.place(ace, PileId::Tableau(0)).unwrap();
/// manager.place(two, PileId::Tableau(0)).unwrap();
///
/// assert_eq!(manager.location(two), Some(Location::new(PileId::Tableau(0), 1)));
/// assert_eq!(manager.top(PileId::Tableau(0)).unwrap(), Some(two));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PileManager {
    /// Card locations: card -> (pile, position)
    locations: FxHashMap<CardId, Location>,

    /// Ordered card lists, index 0 = bottom.
    piles: FxHashMap<PileId, Vec<CardId>>,
}

impl Default for PileManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PileManager {
    /// Create a manager with all piles present and empty.
    #[must_use]
    pub fn new() -> Self {
        let piles = PileId::ALL.iter().map(|&pile| (pile, Vec::new())).collect();
        Self {
            locations: FxHashMap::default(),
            piles,
        }
    }

    /// Empty every pile.
    pub fn clear(&mut self) {
        self.locations.clear();
        for cards in self.piles.values_mut() {
            cards.clear();
        }
    }

    /// Put a card on top of a pile.
    ///
    /// Fails if the card is already tracked or the pile does not exist.
    pub fn place(&mut self, card: CardId, pile: PileId) -> EngineResult<Location> {
        if self.locations.contains_key(&card) {
            return Err(EngineError::InvalidDeck(format!("{card} placed twice")));
        }
        let cards = self.pile_mut(pile)?;
        let location = Location::new(pile, cards.len());
        cards.push(card);
        self.locations.insert(card, location);
        Ok(location)
    }

    /// Get where a card is.
    #[must_use]
    pub fn location(&self, card: CardId) -> Option<Location> {
        self.locations.get(&card).copied()
    }

    /// Cards in a pile, bottom first.
    pub fn cards(&self, pile: PileId) -> EngineResult<&[CardId]> {
        self.piles
            .get(&pile)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::NotFound(format!("pile {pile}")))
    }

    /// Top card of a pile.
    pub fn top(&self, pile: PileId) -> EngineResult<Option<CardId>> {
        Ok(self.cards(pile)?.last().copied())
    }

    /// Number of cards in a pile.
    pub fn len(&self, pile: PileId) -> EngineResult<usize> {
        Ok(self.cards(pile)?.len())
    }

    /// Remove every card at `position` and above from a pile.
    ///
    /// Returns the removed cards in their original order. The moved cards
    /// are no longer tracked until they are appended somewhere.
    pub fn split_off(&mut self, pile: PileId, position: usize) -> EngineResult<Vec<CardId>> {
        let cards = self.pile_mut(pile)?;
        if position > cards.len() {
            return Err(EngineError::NotFound(format!(
                "position {position} in {pile}"
            )));
        }
        let run = cards.split_off(position);
        for card in &run {
            self.locations.remove(card);
        }
        Ok(run)
    }

    /// Append cards to the top of a pile, keeping their order.
    pub fn extend(&mut self, pile: PileId, run: &[CardId]) -> EngineResult<()> {
        if let Some(card) = run.iter().find(|card| self.locations.contains_key(*card)) {
            return Err(EngineError::InvalidDeck(format!("{card} placed twice")));
        }
        let cards = self.pile_mut(pile)?;
        let base = cards.len();
        cards.extend_from_slice(run);
        for (offset, &card) in run.iter().enumerate() {
            self.locations.insert(card, Location::new(pile, base + offset));
        }
        Ok(())
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager tracks a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }

    fn pile_mut(&mut self, pile: PileId) -> EngineResult<&mut Vec<CardId>> {
        self.piles
            .get_mut(&pile)
            .ok_or_else(|| EngineError::NotFound(format!("pile {pile}")))
    }
}
