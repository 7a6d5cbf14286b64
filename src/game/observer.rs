use super::{GameOutcome, Player};

/// Callback interface for the presentation layer.
///
/// The engine pushes render-relevant events through this trait so that
/// it never depends on any UI machinery itself; see
/// [`GameState::apply_move_with`](super::GameState::apply_move_with).
pub trait GameObserver {
    /// A piece landed at (row, column).
    fn piece_dropped(&mut self, row: usize, column: usize, player: Player);

    /// The move ended the game.
    fn game_ended(&mut self, outcome: GameOutcome);
}
