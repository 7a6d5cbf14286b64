use super::{Board, BoardError, GameObserver, MoveError, Player};

/// Terminal result of a game. A running game has no outcome yet, which
/// [`GameState`] models as `Option<GameOutcome>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Where a move landed, as reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// A single game session: grid, whose turn it is, and the resolved
/// outcome. Owned by the caller, so independent sessions can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state on the default 6x7 board.
    pub fn initial() -> Self {
        GameState {
            board: Board::default(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Create initial game state on a custom board size.
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            current_player: Player::Red,
            outcome: None,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the new state (immutable).
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place, returning where the piece landed.
    ///
    /// The outcome is resolved exactly once per move: a win scan for the
    /// mover, then the draw check, otherwise the game continues. The
    /// active player flips only when the move was non-terminal, so after
    /// a win `current_player` is still the winner.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<PlacedPiece, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;
        tracing::debug!(row, column, player = player.name(), "piece placed");

        self.outcome = if self.board.check_win(player.to_cell()) {
            Some(GameOutcome::Winner(player))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match self.outcome {
            Some(outcome) => tracing::info!(?outcome, "game over"),
            None => self.current_player = player.other(),
        }

        Ok(PlacedPiece {
            row,
            column,
            player,
        })
    }

    /// Apply a move in place and notify the observer of the landed
    /// piece and, when the move ended the game, of the outcome.
    pub fn apply_move_with(
        &mut self,
        column: usize,
        observer: &mut dyn GameObserver,
    ) -> Result<PlacedPiece, MoveError> {
        let placed = self.apply_move_mut(column)?;
        observer.piece_dropped(placed.row, placed.column, placed.player);
        if let Some(outcome) = self.outcome {
            observer.game_ended(outcome);
        }
        Ok(placed)
    }

    /// Start a new game on the same board dimensions.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::Red;
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    /// 42 alternating moves that fill the default board without a
    /// four-in-a-row on any intermediate or final position.
    const DRAW_MOVES: [usize; 42] = [
        4, 5, 3, 3, 6, 4, 4, 6, 1, 4, 5, 3, 4, 3, 5, 0, 3, 4, 0, 5, 3, 0, 6, 0, 1, 0, 6, 5, 0, 6,
        5, 2, 6, 1, 2, 1, 2, 1, 2, 2, 1, 2,
    ];

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_with_dimensions() {
        let state = GameState::with_dimensions(4, 5).unwrap();
        assert_eq!(state.board().rows(), 4);
        assert_eq!(state.legal_actions().len(), 5);
        assert!(GameState::with_dimensions(3, 3).is_err());
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let next = state.apply_move(3).unwrap();

        assert_eq!(next.current_player(), Player::Yellow);
        assert_eq!(next.board().get(5, 3), Cell::Red);
        // The original state is untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_apply_move_mut_reports_landing() {
        let mut state = GameState::initial();
        let placed = state.apply_move_mut(2).unwrap();
        assert_eq!(
            placed,
            PlacedPiece {
                row: 5,
                column: 2,
                player: Player::Red
            }
        );
    }

    #[test]
    fn test_horizontal_win_scenario() {
        let mut state = GameState::initial();

        // Red claims the bottom row of columns 0..=3; Yellow stacks on
        // top, off the bottom row.
        for col in 0..3 {
            state.apply_move_mut(col).unwrap(); // Red, bottom row
            state.apply_move_mut(col).unwrap(); // Yellow, row above
        }
        let placed = state.apply_move_mut(3).unwrap();

        assert_eq!(placed.player, Player::Red);
        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.board().check_win(Cell::Red));
        assert!(!state.board().check_win(Cell::Yellow));
    }

    #[test]
    fn test_winner_stays_current_player() {
        let mut state = GameState::initial();
        for col in 0..3 {
            state.apply_move_mut(col).unwrap();
            state.apply_move_mut(col).unwrap();
        }
        state.apply_move_mut(3).unwrap();

        // The marker flips only on non-terminal moves
        assert_eq!(state.current_player(), Player::Red);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = GameState::initial();
        for col in 0..3 {
            state.apply_move_mut(col).unwrap();
            state.apply_move_mut(col).unwrap();
        }
        state.apply_move_mut(3).unwrap();

        let frozen = state.clone();
        assert_eq!(state.apply_move_mut(4), Err(MoveError::GameOver));
        assert_eq!(state, frozen);
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_column_full_leaves_state_unchanged() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state.apply_move_mut(0).unwrap();
        }

        let before = state.clone();
        assert_eq!(state.apply_move_mut(0), Err(MoveError::ColumnFull));
        assert_eq!(state, before);
        // The rejected click costs no turn
        assert_eq!(state.current_player(), before.current_player());
    }

    #[test]
    fn test_legal_actions_skip_full_columns() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state.apply_move_mut(2).unwrap();
        }
        assert_eq!(state.legal_actions(), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_draw_game() {
        let mut state = GameState::initial();

        for &col in &DRAW_MOVES {
            assert!(!state.is_terminal());
            state.apply_move_mut(col).unwrap();
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(state.board().is_full());
        assert!(!state.board().check_win(Cell::Red));
        assert!(!state.board().check_win(Cell::Yellow));
    }

    #[test]
    fn test_reset_starts_fresh_on_same_board() {
        let mut state = GameState::with_dimensions(5, 8).unwrap();
        state.apply_move_mut(0).unwrap();
        state.apply_move_mut(1).unwrap();

        state.reset();

        assert_eq!(state, GameState::with_dimensions(5, 8).unwrap());
    }

    #[derive(Default)]
    struct Recorder {
        drops: Vec<(usize, usize, Player)>,
        ended: Option<GameOutcome>,
    }

    impl GameObserver for Recorder {
        fn piece_dropped(&mut self, row: usize, column: usize, player: Player) {
            self.drops.push((row, column, player));
        }

        fn game_ended(&mut self, outcome: GameOutcome) {
            self.ended = Some(outcome);
        }
    }

    #[test]
    fn test_observer_sees_drops_and_ending() {
        let mut state = GameState::initial();
        let mut recorder = Recorder::default();

        for col in 0..3 {
            state.apply_move_with(col, &mut recorder).unwrap();
            state.apply_move_with(col, &mut recorder).unwrap();
        }
        assert_eq!(recorder.ended, None);
        assert_eq!(recorder.drops.len(), 6);
        assert_eq!(recorder.drops[0], (5, 0, Player::Red));
        assert_eq!(recorder.drops[1], (4, 0, Player::Yellow));

        state.apply_move_with(3, &mut recorder).unwrap();

        assert_eq!(recorder.drops.last(), Some(&(5, 3, Player::Red)));
        assert_eq!(recorder.ended, Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_observer_not_notified_on_rejected_move() {
        let mut state = GameState::initial();
        let mut recorder = Recorder::default();
        for _ in 0..6 {
            state.apply_move_with(0, &mut recorder).unwrap();
        }

        assert_eq!(
            state.apply_move_with(0, &mut recorder),
            Err(MoveError::ColumnFull)
        );
        assert_eq!(recorder.drops.len(), 6);
    }
}
