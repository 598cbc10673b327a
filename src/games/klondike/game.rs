//! Klondike rules and the engine facade.

use crate::core::{
    Board, BoardView, CardId, EngineConfig, EngineResult, FindMode, GameRng, Location, Move,
    MoveOutcome, PileId, PileKind,
};
use crate::rules::{GameStatus, MoveExecutor, MoveFinder, RulesEngine, WinChecker};

/// Standard Klondike rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KlondikeRules {
    /// Cards turned per stock draw.
    draw_count: usize,
}

impl KlondikeRules {
    #[must_use]
    pub fn new(draw_count: usize) -> Self {
        Self { draw_count }
    }

    /// Cards turned per stock draw.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }
}

impl RulesEngine for KlondikeRules {
    fn legal_destinations(
        &self,
        board: &Board,
        card: CardId,
        mode: FindMode,
    ) -> EngineResult<Vec<PileId>> {
        MoveFinder::new(board).destinations(card, mode)
    }

    fn apply_move(&self, board: &mut Board, mv: Move) -> EngineResult<MoveOutcome> {
        MoveExecutor::new(board).execute(mv.card, mv.destination)
    }

    fn draw(&self, board: &mut Board) -> EngineResult<MoveOutcome> {
        MoveExecutor::new(board).draw_from_stock(self.draw_count)
    }

    fn redeal(&self, board: &mut Board) -> EngineResult<MoveOutcome> {
        MoveExecutor::new(board).redeal_from_waste()
    }

    fn status(&self, board: &Board) -> GameStatus {
        if WinChecker::is_won(board) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    fn movable_cards(&self, board: &Board) -> EngineResult<Vec<CardId>> {
        MoveFinder::new(board).movable_cards()
    }
}

/// A single Klondike game.
///
/// Owns one `Board` and drives it through `KlondikeRules`. All calls are
/// synchronous; a UI running on several threads must funnel every call
/// through one owner.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::{EngineConfig, PileId};
/// use klondike_engine::games::klondike::Engine;
///
/// let mut engine = Engine::new(EngineConfig::default().with_seed(42)).unwrap();
/// engine.new_game().unwrap();
///
/// let outcome = engine.draw_from_stock().unwrap();
/// assert_eq!(outcome.moved.len(), 3);
/// assert_eq!(engine.board().pile_len(PileId::Stock).unwrap(), 21);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    rules: KlondikeRules,
    board: Board,
    rng: GameRng,
}

impl Engine {
    /// Create an engine with an empty board. Call `new_game` or `deal`
    /// before playing.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            rules: KlondikeRules::new(config.draw_count),
            config,
            board: Board::new(),
            rng,
        })
    }

    /// Create an engine with default settings and a fixed seed.
    pub fn with_seed(seed: u64) -> EngineResult<Self> {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &KlondikeRules {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    // === Dealing ===

    /// Shuffle with the engine's RNG and deal a new game.
    pub fn new_game(&mut self) -> EngineResult<()> {
        let deck = self.rng.shuffled_deck();
        self.deal(&deck)?;
        tracing::info!(seed = self.rng.seed(), "started new game");
        Ok(())
    }

    /// Deal a new game from an explicit shuffle.
    pub fn deal(&mut self, shuffle: &[CardId]) -> EngineResult<()> {
        self.board.deal(shuffle)
    }

    // === Queries ===

    pub fn locate(&self, card: CardId) -> EngineResult<Location> {
        self.board.locate(card)
    }

    pub fn top_of(&self, pile: PileId) -> EngineResult<Option<CardId>> {
        self.board.top_of(pile)
    }

    pub fn run_above(&self, card: CardId) -> EngineResult<&[CardId]> {
        self.board.run_above(card)
    }

    /// Legal destinations for `card`; with `first_only`, at most one.
    pub fn find_destinations(&self, card: CardId, first_only: bool) -> EngineResult<Vec<PileId>> {
        let mode = if first_only {
            FindMode::FirstFit
        } else {
            FindMode::All
        };
        self.rules.legal_destinations(&self.board, card, mode)
    }

    /// Every legal move on the board.
    pub fn legal_moves(&self) -> EngineResult<Vec<Move>> {
        self.rules.legal_moves(&self.board)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.rules.status(&self.board)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status().is_won()
    }

    /// Snapshot of every pile for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        self.board.view()
    }

    // === Mutation ===

    /// Move `card` (and its run) to `destination`.
    pub fn execute(&mut self, card: CardId, destination: PileId) -> EngineResult<MoveOutcome> {
        let outcome = self
            .rules
            .apply_move(&mut self.board, Move::new(card, destination))?;
        if outcome.won {
            tracing::info!("game won");
        }
        Ok(outcome)
    }

    /// Turn cards from the stock onto the waste.
    pub fn draw_from_stock(&mut self) -> EngineResult<MoveOutcome> {
        self.rules.draw(&mut self.board)
    }

    /// Turn the waste back over onto the empty stock.
    pub fn redeal_from_waste(&mut self) -> EngineResult<MoveOutcome> {
        self.rules.redeal(&mut self.board)
    }

    /// Stock click: draw if the stock has cards, otherwise redeal.
    pub fn turn_stock(&mut self) -> EngineResult<MoveOutcome> {
        if self.board.pile_len(PileId::Stock)? > 0 {
            self.draw_from_stock()
        } else {
            self.redeal_from_waste()
        }
    }

    /// Move `card` to its first legal destination, if any.
    pub fn auto_move(&mut self, card: CardId) -> EngineResult<Option<MoveOutcome>> {
        match self.find_destinations(card, true)?.first() {
            Some(&destination) => self.execute(card, destination).map(Some),
            None => Ok(None),
        }
    }

    /// Single click on a card.
    ///
    /// A face-down stock card turns the stock; a face-up card auto-moves.
    /// Anything else does nothing.
    pub fn activate(&mut self, card: CardId) -> EngineResult<Option<MoveOutcome>> {
        let location = self.board.locate(card)?;
        if self.board.is_face_up(card) {
            self.auto_move(card)
        } else if location.pile.kind() == PileKind::Stock {
            self.draw_from_stock().map(Some)
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineError, Suit};

    fn engine() -> Engine {
        let mut engine = Engine::with_seed(42).unwrap();
        engine.deal(&CardId::deck()).unwrap();
        engine
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = EngineConfig::default().with_draw_count(0);
        assert!(matches!(Engine::new(config), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_undealt_engine() {
        let mut engine = Engine::with_seed(1).unwrap();
        let card = CardId::new(0).unwrap();

        assert!(matches!(engine.locate(card), Err(EngineError::NotFound(_))));
        assert!(matches!(engine.draw_from_stock(), Err(EngineError::InvalidState(_))));
        assert!(!engine.is_won());
    }

    #[test]
    fn test_new_game_is_seeded() {
        let mut a = Engine::with_seed(9).unwrap();
        let mut b = Engine::with_seed(9).unwrap();
        a.new_game().unwrap();
        b.new_game().unwrap();

        assert_eq!(a.board(), b.board());
        assert!(a.board().is_dealt());
    }

    #[test]
    fn test_find_destinations_modes() {
        // Ordered deal: tableau 0 holds the ace of clubs face-up and
        // tableau 6 is topped by the two of hearts.
        let engine = engine();
        let ace = CardId::new(0).unwrap();

        assert_eq!(
            engine.find_destinations(ace, false).unwrap(),
            vec![PileId::Foundation(0), PileId::Tableau(6)]
        );
        assert_eq!(
            engine.find_destinations(ace, true).unwrap(),
            vec![PileId::Foundation(0)]
        );
    }

    #[test]
    fn test_auto_move_ace() {
        let mut engine = engine();
        let ace = CardId::new(0).unwrap();

        let outcome = engine.auto_move(ace).unwrap().unwrap();

        assert_eq!(outcome.destination, Some(PileId::Foundation(0)));
        assert_eq!(engine.top_of(PileId::Tableau(0)).unwrap(), None);
        assert_eq!(engine.top_of(PileId::Foundation(0)).unwrap(), Some(ace));
        assert!(!outcome.won);
    }

    #[test]
    fn test_activate_stock_card_draws() {
        let mut engine = engine();
        let stock_card = engine.top_of(PileId::Stock).unwrap().unwrap();

        let outcome = engine.activate(stock_card).unwrap().unwrap();

        assert_eq!(outcome.source, Some(PileId::Stock));
        assert_eq!(engine.board().pile_len(PileId::Waste).unwrap(), 3);
    }

    #[test]
    fn test_activate_face_down_tableau_card_does_nothing() {
        let mut engine = engine();
        let hidden = engine.board().pile(PileId::Tableau(6)).unwrap()[0];
        let before = engine.board().clone();

        assert_eq!(engine.activate(hidden).unwrap(), None);
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_turn_stock_cycles() {
        let mut engine = engine();

        for _ in 0..8 {
            engine.turn_stock().unwrap();
        }
        assert_eq!(engine.board().pile_len(PileId::Stock).unwrap(), 0);

        let outcome = engine.turn_stock().unwrap();
        assert_eq!(outcome.destination, Some(PileId::Stock));
        assert_eq!(engine.board().pile_len(PileId::Stock).unwrap(), 24);
    }

    #[test]
    fn test_draw_one_config() {
        let config = EngineConfig::default().with_draw_count(1).with_seed(3);
        let mut engine = Engine::new(config).unwrap();
        engine.new_game().unwrap();

        let outcome = engine.draw_from_stock().unwrap();
        assert_eq!(outcome.moved.len(), 1);
        assert_eq!(engine.rules().draw_count(), 1);
    }

    #[test]
    fn test_winning_move_reports_win() {
        use crate::core::{BoardBuilder, Card};

        let king = CardId::from_card(Card::new(Suit::Spades, 13).unwrap());
        let board = BoardBuilder::new()
            .foundation_up_to(Suit::Clubs, 13)
            .foundation_up_to(Suit::Diamonds, 13)
            .foundation_up_to(Suit::Hearts, 13)
            .foundation_up_to(Suit::Spades, 12)
            .tableau_up(4, &[king])
            .build()
            .unwrap();
        let mut engine = Engine::with_seed(0).unwrap();
        engine.board = board;

        assert!(!engine.is_won());
        let outcome = engine.auto_move(king).unwrap().unwrap();

        assert!(outcome.won);
        assert!(engine.is_won());
        assert_eq!(engine.status(), GameStatus::Won);
    }
}
