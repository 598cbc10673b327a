//! Pile addressing and engine configuration.
//!
//! Klondike has a fixed layout of 13 piles:
//! - 1 Stock (face-down draw source)
//! - 1 Waste (cards drawn from Stock)
//! - 4 Foundations, one per suit
//! - 7 Tableau columns
//!
//! `PileId` is a tagged variant over that layout. Numbered variants carry
//! their index; anything out of range is rejected with `NotFound` wherever
//! a pile is dereferenced.

use serde::{Deserialize, Serialize};

use super::card::Suit;
use super::error::{EngineError, EngineResult};

/// Number of foundation piles.
pub const FOUNDATION_COUNT: u8 = 4;

/// Number of tableau piles.
pub const TABLEAU_COUNT: u8 = 7;

/// Total number of piles on the board.
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT as usize + TABLEAU_COUNT as usize;

/// Kind of pile, without its number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

/// Address of a single pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    /// Foundation pile for the suit with this index (see `Suit::ALL`).
    Foundation(u8),
    /// Tableau column, 0 = leftmost.
    Tableau(u8),
}

impl PileId {
    /// Every pile in stable order: stock, waste, foundations, tableau.
    pub const ALL: [PileId; PILE_COUNT] = [
        PileId::Stock,
        PileId::Waste,
        PileId::Foundation(0),
        PileId::Foundation(1),
        PileId::Foundation(2),
        PileId::Foundation(3),
        PileId::Tableau(0),
        PileId::Tableau(1),
        PileId::Tableau(2),
        PileId::Tableau(3),
        PileId::Tableau(4),
        PileId::Tableau(5),
        PileId::Tableau(6),
    ];

    /// Foundation pile holding `suit`.
    #[must_use]
    pub const fn foundation_for(suit: Suit) -> Self {
        PileId::Foundation(suit.index())
    }

    /// Iterate over the foundation piles in suit order.
    pub fn foundations() -> impl Iterator<Item = PileId> {
        (0..FOUNDATION_COUNT).map(PileId::Foundation)
    }

    /// Iterate over the tableau piles, left to right.
    pub fn tableaus() -> impl Iterator<Item = PileId> {
        (0..TABLEAU_COUNT).map(PileId::Tableau)
    }

    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Tableau(_) => PileKind::Tableau,
        }
    }

    /// Pile number for foundation and tableau piles.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            PileId::Stock | PileId::Waste => None,
            PileId::Foundation(n) | PileId::Tableau(n) => Some(n),
        }
    }

    /// Suit a foundation pile is reserved for.
    #[must_use]
    pub const fn foundation_suit(self) -> Option<Suit> {
        match self {
            PileId::Foundation(n) => Suit::from_index(n),
            _ => None,
        }
    }

    /// Slot of this pile in `PileId::ALL`, or `NotFound` if the number is
    /// out of range.
    pub fn slot(self) -> EngineResult<usize> {
        match self {
            PileId::Stock => Ok(0),
            PileId::Waste => Ok(1),
            PileId::Foundation(n) if n < FOUNDATION_COUNT => Ok(2 + n as usize),
            PileId::Tableau(n) if n < TABLEAU_COUNT => {
                Ok(2 + FOUNDATION_COUNT as usize + n as usize)
            }
            _ => Err(EngineError::NotFound(format!("pile {self}"))),
        }
    }

    /// Check that the pile number is in range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.slot().is_ok()
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Waste => write!(f, "Waste"),
            PileId::Foundation(n) => write!(f, "Foundation({n})"),
            PileId::Tableau(n) => write!(f, "Tableau({n})"),
        }
    }
}

/// Where a card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub pile: PileId,
    /// Index within the pile, 0 = bottom.
    pub position: usize,
}

impl Location {
    #[must_use]
    pub const fn new(pile: PileId, position: usize) -> Self {
        Self { pile, position }
    }
}

/// Default number of cards flipped per stock draw.
pub const DEFAULT_DRAW_COUNT: usize = 3;

/// Engine configuration.
///
/// ```
/// use klondike_engine::core::EngineConfig;
///
/// let config = EngineConfig::default().with_draw_count(1).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(EngineConfig::default().with_draw_count(0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards moved from Stock to Waste per draw (1..=3).
    pub draw_count: usize,

    /// Seed for `Engine::new_game` shuffles. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            draw_count: DEFAULT_DRAW_COUNT,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the draw count.
    #[must_use]
    pub fn with_draw_count(mut self, draw_count: usize) -> Self {
        self.draw_count = draw_count;
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=DEFAULT_DRAW_COUNT).contains(&self.draw_count) {
            return Err(EngineError::InvalidConfig(format!(
                "draw_count must be 1..={DEFAULT_DRAW_COUNT}, got {}",
                self.draw_count
            )));
        }
        Ok(())
    }
}
