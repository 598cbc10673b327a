//! Board state: every pile, every card's location, and face-up flags.
//!
//! ## Board
//!
//! The single source of truth for card placement. It answers positional
//! queries (`locate`, `top_of`, `run_above`) and deals new games. The
//! move finder and executor in `rules` read and mutate it.
//!
//! Invariant: once dealt, every one of the 52 cards sits in exactly one
//! pile. An undealt board is empty.
//!
//! ## BoardBuilder
//!
//! Builds arbitrary closed positions, mainly for tests.
//!
//! ## BoardView
//!
//! Serializable snapshot of all piles for renderers.

use serde::{Deserialize, Serialize};

use super::card::{CardId, Suit, DECK_SIZE};
use super::config::{Location, PileId, TABLEAU_COUNT};
use super::error::{EngineError, EngineResult};
use crate::zones::PileManager;

/// Full game board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Pile contents and card location index.
    piles: PileManager,

    /// Face-up flag per card, indexed by `CardId::index`.
    face_up: [bool; DECK_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty, undealt board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: PileManager::new(),
            face_up: [false; DECK_SIZE],
        }
    }

    /// Create a board dealt from `shuffle`.
    pub fn dealt(shuffle: &[CardId]) -> EngineResult<Self> {
        let mut board = Self::new();
        board.deal(shuffle)?;
        Ok(board)
    }

    // === Dealing ===

    /// Reset the board and deal a new game from `shuffle`.
    ///
    /// The first 28 cards go to the tableau triangle: round `r` deals one
    /// card to each of piles `r..7`, and the card pile `r` receives in
    /// round `r` is its last one and the only one dealt face-up. Pile `i`
    /// ends up with `i + 1` cards. The remaining 24 cards go face-down to
    /// the stock, bottom to top in shuffle order.
    ///
    /// Fails with `InvalidDeck` (board untouched) unless `shuffle` holds
    /// each of the 52 cards exactly once.
    pub fn deal(&mut self, shuffle: &[CardId]) -> EngineResult<()> {
        validate_deck(shuffle)?;

        self.piles.clear();
        self.face_up = [false; DECK_SIZE];

        let mut cards = shuffle.iter().copied();
        for round in 0..TABLEAU_COUNT {
            for column in round..TABLEAU_COUNT {
                let Some(card) = cards.next() else {
                    return Err(EngineError::InvalidDeck("ran out of cards".into()));
                };
                self.piles.place(card, PileId::Tableau(column))?;
                self.face_up[card.index()] = column == round;
            }
        }
        for card in cards {
            self.piles.place(card, PileId::Stock)?;
        }

        tracing::debug!(stock = self.piles.len(PileId::Stock)?, "dealt new board");
        Ok(())
    }

    // === Queries ===

    /// Where a card currently is.
    ///
    /// `NotFound` means the board is undealt or corrupted.
    pub fn locate(&self, card: CardId) -> EngineResult<Location> {
        self.piles
            .location(card)
            .ok_or_else(|| EngineError::NotFound(format!("card {card}")))
    }

    /// Top card of a pile, or `None` if it is empty.
    pub fn top_of(&self, pile: PileId) -> EngineResult<Option<CardId>> {
        self.piles.top(pile)
    }

    /// Cards stacked on top of `card` in its pile, bottom first.
    ///
    /// These travel with the card when it moves.
    pub fn run_above(&self, card: CardId) -> EngineResult<&[CardId]> {
        let location = self.locate(card)?;
        let cards = self.piles.cards(location.pile)?;
        Ok(&cards[location.position + 1..])
    }

    /// Cards in a pile, bottom first.
    pub fn pile(&self, pile: PileId) -> EngineResult<&[CardId]> {
        self.piles.cards(pile)
    }

    /// Number of cards in a pile.
    pub fn pile_len(&self, pile: PileId) -> EngineResult<usize> {
        self.piles.len(pile)
    }

    /// Check if a card is face-up.
    #[must_use]
    pub fn is_face_up(&self, card: CardId) -> bool {
        self.face_up[card.index()]
    }

    /// Number of cards on the board (52 once dealt).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.total_cards()
    }

    /// Check if the board holds the full deck.
    #[must_use]
    pub fn is_dealt(&self) -> bool {
        self.card_count() == DECK_SIZE
    }

    /// Snapshot of every pile for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let piles = PileId::ALL
            .iter()
            .map(|&pile| PileView {
                pile,
                cards: self
                    .piles
                    .cards(pile)
                    .unwrap_or_default()
                    .iter()
                    .map(|&card| CardView {
                        card,
                        face_up: self.is_face_up(card),
                    })
                    .collect(),
            })
            .collect();
        BoardView { piles }
    }

    // === Mutation (executor only) ===

    pub(crate) fn piles_mut(&mut self) -> &mut PileManager {
        &mut self.piles
    }

    pub(crate) fn set_face_up(&mut self, card: CardId, face_up: bool) {
        self.face_up[card.index()] = face_up;
    }
}

/// Check that `cards` is exactly the 52-card deck.
fn validate_deck(cards: &[CardId]) -> EngineResult<()> {
    if cards.len() != DECK_SIZE {
        return Err(EngineError::InvalidDeck(format!(
            "expected {DECK_SIZE} cards, got {}",
            cards.len()
        )));
    }
    let mut seen = [false; DECK_SIZE];
    for &card in cards {
        if std::mem::replace(&mut seen[card.index()], true) {
            return Err(EngineError::InvalidDeck(format!("{card} appears twice")));
        }
    }
    Ok(())
}

/// Check that every tableau column is face-down cards under a face-up run
/// that descends by one in alternating colors.
fn validate_tableaus(board: &Board) -> EngineResult<()> {
    for pile in PileId::tableaus() {
        let cards = board.pile(pile)?;
        let hidden = cards.iter().take_while(|&&card| !board.is_face_up(card)).count();
        let shown = &cards[hidden..];
        if let Some(&card) = shown.iter().find(|&&card| !board.is_face_up(card)) {
            return Err(EngineError::InvalidDeck(format!(
                "{card} is face-down above a face-up card in {pile}"
            )));
        }
        for pair in shown.windows(2) {
            let (below, above) = (pair[0], pair[1]);
            if below.rank() != above.rank() + 1 || below.color() == above.color() {
                return Err(EngineError::InvalidDeck(format!(
                    "{above} cannot sit on {below} in {pile}"
                )));
            }
        }
    }
    Ok(())
}

/// Builder for arbitrary board positions.
///
/// Cards are stacked in call order. Stock cards are face-down; waste and
/// foundation cards are face-up; tableau cards take the face given.
/// `build` rejects a tableau column unless its face-down cards sit under
/// a face-up run descending in alternating colors.
///
/// ```
/// use klondike_engine::core::{BoardBuilder, PileId, Suit};
///
/// let board = BoardBuilder::new()
///     .foundation_up_to(Suit::Clubs, 13)
///     .foundation_up_to(Suit::Diamonds, 13)
///     .foundation_up_to(Suit::Hearts, 13)
///     .foundation_up_to(Suit::Spades, 12)
///     .fill_stock()
///     .build()
///     .unwrap();
///
/// assert_eq!(board.pile_len(PileId::Stock).unwrap(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    placements: Vec<(PileId, CardId, bool)>,
    fill_stock: bool,
}

impl BoardBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack face-down cards on the stock.
    #[must_use]
    pub fn stock(mut self, cards: &[CardId]) -> Self {
        self.push(PileId::Stock, cards, false);
        self
    }

    /// Stack face-up cards on the waste.
    #[must_use]
    pub fn waste(mut self, cards: &[CardId]) -> Self {
        self.push(PileId::Waste, cards, true);
        self
    }

    /// Fill a suit's foundation with ace through `rank`.
    #[must_use]
    pub fn foundation_up_to(mut self, suit: Suit, rank: u8) -> Self {
        let cards: Vec<CardId> = CardId::all()
            .filter(|card| card.suit() == suit && card.rank() <= rank)
            .collect();
        self.push(PileId::foundation_for(suit), &cards, true);
        self
    }

    /// Stack face-down cards on a tableau column.
    #[must_use]
    pub fn tableau_down(mut self, column: u8, cards: &[CardId]) -> Self {
        self.push(PileId::Tableau(column), cards, false);
        self
    }

    /// Stack face-up cards on a tableau column.
    #[must_use]
    pub fn tableau_up(mut self, column: u8, cards: &[CardId]) -> Self {
        self.push(PileId::Tableau(column), cards, true);
        self
    }

    /// Put every card not placed elsewhere on the stock, face-down, in
    /// card ID order.
    #[must_use]
    pub fn fill_stock(mut self) -> Self {
        self.fill_stock = true;
        self
    }

    /// Build the board.
    ///
    /// Fails with `InvalidDeck` unless every card is placed exactly once,
    /// or `NotFound` for an out-of-range pile.
    pub fn build(self) -> EngineResult<Board> {
        let mut board = Board::new();
        for (pile, card, face_up) in self.placements {
            board.piles.place(card, pile)?;
            board.face_up[card.index()] = face_up;
        }
        if self.fill_stock {
            let rest: Vec<CardId> = CardId::all()
                .filter(|&card| !board.piles.contains(card))
                .collect();
            board.piles.extend(PileId::Stock, &rest)?;
        }
        if !board.is_dealt() {
            return Err(EngineError::InvalidDeck(format!(
                "layout holds {} of {DECK_SIZE} cards",
                board.card_count()
            )));
        }
        validate_tableaus(&board)?;
        Ok(board)
    }

    fn push(&mut self, pile: PileId, cards: &[CardId], face_up: bool) {
        self.placements
            .extend(cards.iter().map(|&card| (pile, card, face_up)));
    }
}

/// Serializable snapshot of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Every pile, in `PileId::ALL` order.
    pub piles: Vec<PileView>,
}

impl BoardView {
    /// Contents of one pile.
    #[must_use]
    pub fn pile(&self, pile: PileId) -> Option<&PileView> {
        self.piles.iter().find(|view| view.pile == pile)
    }
}

/// One pile in a `BoardView`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub pile: PileId,
    /// Bottom first.
    pub cards: Vec<CardView>,
}

/// One card in a `PileView`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub card: CardId,
    pub face_up: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Card;

    fn ordered_board() -> Board {
        Board::dealt(&CardId::deck()).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.card_count(), 0);
        assert!(!board.is_dealt());
        assert!(matches!(
            board.locate(CardId::new(0).unwrap()),
            Err(EngineError::NotFound(_))
        ));
    }

    #[test]
    fn test_deal_pile_sizes() {
        let board = ordered_board();

        for (i, pile) in PileId::tableaus().enumerate() {
            assert_eq!(board.pile_len(pile).unwrap(), i + 1);
        }
        assert_eq!(board.pile_len(PileId::Stock).unwrap(), 24);
        assert_eq!(board.pile_len(PileId::Waste).unwrap(), 0);
        for pile in PileId::foundations() {
            assert_eq!(board.pile_len(pile).unwrap(), 0);
        }
        assert!(board.is_dealt());
    }

    #[test]
    fn test_deal_order() {
        let board = ordered_board();
        let deck = CardId::deck();

        // Round 0 deals cards 0..7 across piles 0..7.
        assert_eq!(board.pile(PileId::Tableau(0)).unwrap(), &[deck[0]]);
        assert_eq!(board.pile(PileId::Tableau(1)).unwrap(), &[deck[1], deck[7]]);
        // Pile 6 gets one card per round; last card dealt is deck[27].
        assert_eq!(board.top_of(PileId::Tableau(6)).unwrap(), Some(deck[27]));
        // Stock is the rest, bottom to top.
        assert_eq!(board.pile(PileId::Stock).unwrap(), &deck[28..]);
    }

    #[test]
    fn test_deal_face_flags() {
        let board = ordered_board();

        for pile in PileId::tableaus() {
            let cards = board.pile(pile).unwrap();
            let (top, rest) = cards.split_last().unwrap();
            assert!(board.is_face_up(*top));
            assert!(rest.iter().all(|&c| !board.is_face_up(c)));
        }
        for &card in board.pile(PileId::Stock).unwrap() {
            assert!(!board.is_face_up(card));
        }
    }

    #[test]
    fn test_deal_rejects_bad_decks() {
        let mut board = ordered_board();
        let before = board.clone();

        let mut short = CardId::deck();
        short.pop();
        assert!(matches!(board.deal(&short), Err(EngineError::InvalidDeck(_))));

        let mut duplicated = CardId::deck();
        duplicated[51] = duplicated[0];
        assert!(matches!(board.deal(&duplicated), Err(EngineError::InvalidDeck(_))));

        assert_eq!(board, before);
    }

    #[test]
    fn test_redeal_resets_faces() {
        let mut board = ordered_board();
        let mut reversed = CardId::deck();
        reversed.reverse();

        board.deal(&reversed).unwrap();

        assert_eq!(board.card_count(), DECK_SIZE);
        assert_eq!(board.pile(PileId::Tableau(0)).unwrap(), &[reversed[0]]);
        assert!(!board.is_face_up(reversed[30]));
    }

    #[test]
    fn test_locate_and_run_above() {
        let board = ordered_board();
        let pile = board.pile(PileId::Tableau(3)).unwrap().to_vec();

        let location = board.locate(pile[1]).unwrap();
        assert_eq!(location, Location::new(PileId::Tableau(3), 1));
        assert_eq!(board.run_above(pile[1]).unwrap(), &pile[2..]);
        assert!(board.run_above(pile[3]).unwrap().is_empty());
    }

    #[test]
    fn test_top_of_unknown_pile() {
        let board = ordered_board();
        assert!(matches!(
            board.top_of(PileId::Foundation(7)),
            Err(EngineError::NotFound(_))
        ));
        assert_eq!(board.top_of(PileId::Waste).unwrap(), None);
    }

    #[test]
    fn test_builder_requires_full_deck() {
        let result = BoardBuilder::new()
            .foundation_up_to(Suit::Clubs, 13)
            .build();
        assert!(matches!(result, Err(EngineError::InvalidDeck(_))));

        let ace = CardId::new(0).unwrap();
        let result = BoardBuilder::new()
            .waste(&[ace])
            .tableau_up(0, &[ace])
            .fill_stock()
            .build();
        assert!(matches!(result, Err(EngineError::InvalidDeck(_))));
    }

    #[test]
    fn test_builder_rejects_malformed_tableau() {
        let card = |suit, rank| CardId::from_card(Card::new(suit, rank).unwrap());

        let same_color = BoardBuilder::new()
            .tableau_up(0, &[card(Suit::Spades, 9), card(Suit::Clubs, 8)])
            .fill_stock()
            .build();
        assert!(matches!(same_color, Err(EngineError::InvalidDeck(_))));

        let skipped_rank = BoardBuilder::new()
            .tableau_up(0, &[card(Suit::Spades, 9), card(Suit::Hearts, 7)])
            .fill_stock()
            .build();
        assert!(matches!(skipped_rank, Err(EngineError::InvalidDeck(_))));

        let buried_face_up = BoardBuilder::new()
            .tableau_up(0, &[card(Suit::Spades, 9)])
            .tableau_down(0, &[card(Suit::Hearts, 8)])
            .fill_stock()
            .build();
        assert!(matches!(buried_face_up, Err(EngineError::InvalidDeck(_))));

        let well_formed = BoardBuilder::new()
            .tableau_down(0, &[card(Suit::Clubs, 2)])
            .tableau_up(0, &[card(Suit::Spades, 9), card(Suit::Hearts, 8)])
            .fill_stock()
            .build();
        assert!(well_formed.is_ok());
    }

    #[test]
    fn test_builder_faces() {
        let ace = CardId::new(0).unwrap();
        let two = CardId::new(1).unwrap();
        let three = CardId::new(2).unwrap();

        let board = BoardBuilder::new()
            .tableau_down(2, &[ace])
            .tableau_up(2, &[two])
            .waste(&[three])
            .fill_stock()
            .build()
            .unwrap();

        assert!(!board.is_face_up(ace));
        assert!(board.is_face_up(two));
        assert!(board.is_face_up(three));
        assert_eq!(board.pile(PileId::Tableau(2)).unwrap(), &[ace, two]);
        assert_eq!(board.pile_len(PileId::Stock).unwrap(), 49);
    }

    #[test]
    fn test_view() {
        let board = ordered_board();
        let view = board.view();

        assert_eq!(view.piles.len(), PileId::ALL.len());
        let column = view.pile(PileId::Tableau(1)).unwrap();
        assert_eq!(column.cards.len(), 2);
        assert!(!column.cards[0].face_up);
        assert!(column.cards[1].face_up);

        let json = serde_json::to_string(&view).unwrap();
        let deserialized: BoardView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
