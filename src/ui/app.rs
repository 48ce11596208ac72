use crate::game::{GameState, MoveOutcome, Player};
use crate::error::MoveError;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Terminal UI options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for a key press before redrawing
    pub poll_interval_ms: u64,
    /// Column the selector starts on
    pub start_column: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            start_column: 3, // Start in middle
        }
    }
}

pub struct App {
    game_state: GameState,
    selected_column: usize,
    start_column: usize,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &UiConfig, first_player: Player) -> Self {
        let game_state = GameState::starting_with(first_player);
        let start_column = config.start_column.min(game_state.board().width() - 1);
        App {
            game_state,
            selected_column: start_column,
            start_column,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            should_quit: false,
            message: None,
        }
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
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

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
                if self.selected_column + 1 < self.game_state.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.submit_move(self.selected_column) {
            Ok(MoveOutcome::Accepted { .. }) => {}
            Ok(MoveOutcome::Rejected) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(MoveOutcome::Won { player }) => {
                self.message = Some(format!("{player} has won!"));
            }
            Ok(MoveOutcome::Tied) => {
                self.message = Some("It's a tie!".to_string());
            }
            Err(MoveError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(format!("Invalid move: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&UiConfig::default(), Player::One)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameStatus, HEIGHT, WIDTH};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn drop_in(app: &mut App, col: usize) {
        app.selected_column = col;
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = App::default();
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, WIDTH - 1);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_enter_drops_piece() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state.cell_owner(HEIGHT - 1, 3), Ok(Cell::One));
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::default();
        for _ in 0..HEIGHT {
            drop_in(&mut app, 0);
        }
        drop_in(&mut app, 0);
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }

    #[test]
    fn test_win_message_and_restart() {
        let mut app = App::default();
        for col in [0, 6, 1, 6, 2, 6, 3] {
            drop_in(&mut app, col);
        }
        assert_eq!(app.message.as_deref(), Some("Player 1 has won!"));
        assert_eq!(app.game_state.status(), GameStatus::Won(Player::One));

        drop_in(&mut app, 4);
        assert_eq!(app.message.as_deref(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.message.as_deref(), Some("New game started!"));
        assert_eq!(app.game_state.status(), GameStatus::InProgress { active: Player::One });
        assert_eq!(app.selected_column, 3);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_config_applies() {
        let config = UiConfig {
            poll_interval_ms: 250,
            start_column: 0,
        };
        let app = App::new(&config, Player::Two);
        assert_eq!(app.selected_column, 0);
        assert_eq!(app.poll_interval, Duration::from_millis(250));
        assert_eq!(app.game_state.active_player(), Some(Player::Two));
    }
}
