use crate::config::AppConfig;
use crate::game::{BoardError, GameObserver, GameOutcome, GameState, MoveError, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Message area state. Implements [`GameObserver`] so the engine's
/// render events land here without the core knowing about the UI.
#[derive(Default)]
struct StatusLine {
    message: Option<String>,
}

impl GameObserver for StatusLine {
    fn piece_dropped(&mut self, row: usize, column: usize, player: Player) {
        tracing::debug!(row, column, player = player.name(), "piece rendered");
        self.message = None;
    }

    fn game_ended(&mut self, outcome: GameOutcome) {
        self.message = Some(match outcome {
            GameOutcome::Winner(player) => {
                format!("{} wins! Press 'r' for a new game.", player.name())
            }
            GameOutcome::Draw => "It's a draw! Press 'r' for a new game.".to_string(),
        });
    }
}

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    status: StatusLine,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        Ok(App {
            game_state: GameState::with_dimensions(config.board.rows, config.board.cols)?,
            selected_column: config.board.cols / 2, // Start in middle
            should_quit: false,
            status: StatusLine::default(),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = self.game_state.board().cols() / 2;
                self.status.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.status.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self
            .game_state
            .apply_move_with(self.selected_column, &mut self.status)
        {
            Ok(_) => {}
            Err(MoveError::ColumnFull) => {
                // The defined response to a full column: the input is
                // ignored and the grid is untouched.
                self.status.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.status.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.status.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.status.message,
        );
    }
}
