//! Card identity: suits, colors, ranks, and compact card IDs.
//!
//! A standard deck has 52 cards. Each card is identified by a `CardId`
//! in `0..52`, laid out suit-major:
//!
//! - `0..13`: clubs, ace through king
//! - `13..26`: diamonds
//! - `26..39`: hearts
//! - `39..52`: spades
//!
//! Identity never changes during a game. The mutable face-up flag lives
//! on the `Board`, not here.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::{Card, CardId, Color, Suit};
//!
//! let id = CardId::from_card(Card::new(Suit::Hearts, 12).unwrap());
//! assert_eq!(id.card().rank(), 12);
//! assert_eq!(id.card().color(), Color::Red);
//! assert_eq!(id.to_string(), "QH");
//! ```

use serde::{Deserialize, Serialize};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Rank of an ace.
pub const ACE: u8 = 1;

/// Rank of a king.
pub const KING: u8 = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in their fixed order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Index of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    /// Suit for an index in `Suit::ALL`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Clubs and spades are black; diamonds and hearts are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// Immutable card identity: a suit and a rank in `1..=13`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: u8,
}

/// Unchecked wire form of a `Card`.
#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = String;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Self::new(raw.suit, raw.rank).ok_or_else(|| format!("rank {} out of range", raw.rank))
    }
}

impl Card {
    /// Create a card. Returns `None` if `rank` is outside `1..=13`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Option<Self> {
        if rank >= ACE && rank <= KING {
            Some(Self { suit, rank })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Check if this is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == ACE
    }

    /// Check if this is a king.
    #[must_use]
    pub const fn is_king(self) -> bool {
        self.rank == KING
    }
}

/// Compact identifier for one of the 52 cards.
///
/// Only valid IDs can be constructed, so every `CardId` maps to exactly
/// one `Card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(u8);

impl CardId {
    /// Create a card ID. Returns `None` for values outside `0..52`.
    #[must_use]
    pub const fn new(raw: u8) -> Option<Self> {
        if (raw as usize) < DECK_SIZE {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// ID of a specific card.
    #[must_use]
    pub const fn from_card(card: Card) -> Self {
        Self(card.suit.index() * RANKS_PER_SUIT + (card.rank - 1))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Position of this card in a 52-slot table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Decode the card identity.
    #[must_use]
    pub const fn card(self) -> Card {
        let suit = match Suit::from_index(self.0 / RANKS_PER_SUIT) {
            Some(suit) => suit,
            // Unreachable: the constructor bounds the raw value.
            None => Suit::Spades,
        };
        Card {
            suit,
            rank: self.0 % RANKS_PER_SUIT + 1,
        }
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.card().suit
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.card().rank
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.card().color()
    }

    /// Iterate over all 52 card IDs in creation order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }

    /// A fresh, unshuffled deck.
    #[must_use]
    pub fn deck() -> Vec<CardId> {
        Self::all().collect()
    }
}

impl TryFrom<u8> for CardId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| format!("card id {raw} out of range"))
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl From<Card> for CardId {
    fn from(card: Card) -> Self {
        Self::from_card(card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            1 => "A".to_string(),
            10 => "T".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        };
        write!(f, "{}{}", rank, self.suit.symbol())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.card())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Hearts.color(), Color::Red);
    }

    #[test]
    fn test_card_rank_bounds() {
        assert!(Card::new(Suit::Clubs, 0).is_none());
        assert!(Card::new(Suit::Clubs, 14).is_none());
        assert!(Card::new(Suit::Clubs, 1).unwrap().is_ace());
        assert!(Card::new(Suit::Clubs, 13).unwrap().is_king());
    }

    #[test]
    fn test_card_id_layout() {
        let ace_clubs = CardId::new(0).unwrap();
        assert_eq!(ace_clubs.suit(), Suit::Clubs);
        assert_eq!(ace_clubs.rank(), 1);

        let king_spades = CardId::new(51).unwrap();
        assert_eq!(king_spades.suit(), Suit::Spades);
        assert_eq!(king_spades.rank(), 13);

        let two_hearts = CardId::new(27).unwrap();
        assert_eq!(two_hearts.suit(), Suit::Hearts);
        assert_eq!(two_hearts.rank(), 2);

        assert!(CardId::new(52).is_none());
    }

    #[test]
    fn test_card_id_matches_card() {
        for id in CardId::all() {
            assert_eq!(CardId::from_card(id.card()), id);
        }
    }

    #[test]
    fn test_deck_is_complete() {
        let deck = CardId::deck();
        assert_eq!(deck.len(), DECK_SIZE);
        for (i, id) in deck.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_display() {
        let card = |suit, rank| CardId::from_card(Card::new(suit, rank).unwrap());
        assert_eq!(card(Suit::Spades, 1).to_string(), "AS");
        assert_eq!(card(Suit::Diamonds, 10).to_string(), "TD");
        assert_eq!(card(Suit::Clubs, 7).to_string(), "7C");
        assert_eq!(card(Suit::Hearts, 13).to_string(), "KH");
    }

    #[test]
    fn test_serialization() {
        let id = CardId::new(17).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "17");
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);

        assert!(serde_json::from_str::<CardId>("52").is_err());
    }

    #[test]
    fn test_card_deserialization_checks_rank() {
        let queen = Card::new(Suit::Hearts, 12).unwrap();
        let json = serde_json::to_string(&queen).unwrap();
        assert_eq!(json, r#"{"suit":"Hearts","rank":12}"#);
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), queen);

        assert!(serde_json::from_str::<Card>(r#"{"suit":"Clubs","rank":0}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"suit":"Spades","rank":14}"#).is_err());
    }
}
