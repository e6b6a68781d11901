//! The board, whose turn it is, and the move prompt.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, error, instrument};

use crate::controller::{GameMode, Match, MatchError, MatchOutcome, PhaseEvent, TurnOutcome};
use crate::tui::board_view::render_board;
use crate::tui::keymap::KeyAction;
use crate::tui::screen::{Screen, ScreenTransition};

/// Prompt shown under the board.
pub const MOVE_PROMPT: &str = "Choose a position [1-9]: (q to quit, r to return to menu)";

/// Notice shown after a refused move until the next accepted one.
pub const INVALID_MOVE_NOTICE: &str = "Invalid move!";

/// State for a running match.
#[derive(Debug, Getters)]
pub struct InGameScreen {
    mode: GameMode,
    game: Match,
    notice: Option<&'static str>,
}

impl InGameScreen {
    /// Wraps a freshly seated match.
    #[instrument(skip(game))]
    pub fn new(mode: GameMode, game: Match) -> Self {
        Self {
            mode,
            game,
            notice: None,
        }
    }

    /// How the match ended, once it has.
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.game.outcome()
    }

    fn apply(&mut self, result: Result<TurnOutcome, MatchError>) -> ScreenTransition {
        match result {
            Ok(TurnOutcome::Rejected(e)) => {
                debug!(error = %e, "Showing invalid move notice");
                self.notice = Some(INVALID_MOVE_NOTICE);
                ScreenTransition::Stay
            }
            Ok(TurnOutcome::Continue) => {
                self.notice = None;
                ScreenTransition::Stay
            }
            Ok(TurnOutcome::Finished(_)) => {
                self.notice = None;
                ScreenTransition::Phase(PhaseEvent::MatchEnded)
            }
            Err(e) => {
                error!(error = %e, "Match cannot continue");
                ScreenTransition::Phase(PhaseEvent::Back)
            }
        }
    }
}

impl Screen for InGameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(5),
            ])
            .split(frame.area());

        let title = Paragraph::new(self.mode.to_string())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let show_cursor = !self.game.is_cpu_turn();
        render_board(frame, chunks[1], self.game.board(), show_cursor);

        let current = self.game.current();
        let mut lines = vec![
            Line::from(format!("Turn: {} ({})", current.name(), current.figure())),
            Line::styled(MOVE_PROMPT, Style::default().fg(Color::DarkGray)),
        ];
        if let Some(notice) = self.notice {
            lines.push(Line::styled(notice, Style::default().fg(Color::Red)));
        }
        let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        let action = KeyAction::from(key.code);
        match action {
            KeyAction::Quit => return ScreenTransition::Phase(PhaseEvent::Quit),
            KeyAction::Back => return ScreenTransition::Phase(PhaseEvent::Back),
            _ if self.game.is_cpu_turn() => return ScreenTransition::Stay,
            _ => {}
        }

        match action {
            KeyAction::Digit(pos) => {
                let result = self.game.play(pos);
                self.apply(result)
            }
            KeyAction::Confirm => {
                let result = self.game.play_cursor();
                self.apply(result)
            }
            KeyAction::Move(direction) => {
                self.game.move_cursor(direction);
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self))]
    fn tick(&mut self) -> ScreenTransition {
        if !self.game.is_cpu_turn() {
            return ScreenTransition::Stay;
        }
        let result = self.game.play_cpu_turn();
        self.apply(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(mode: GameMode) -> InGameScreen {
        let config = GameConfig::default().with_seed(Some(11));
        InGameScreen::new(mode, Match::for_mode(mode, &config).unwrap())
    }

    fn press(screen: &mut InGameScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::from(code))
    }

    fn rendered(screen: &InGameScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal.draw(|frame| screen.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_rejected_move_shows_notice_until_next_accepted_move() {
        let mut screen = screen(GameMode::Pvp);
        assert_eq!(press(&mut screen, KeyCode::Char('5')), ScreenTransition::Stay);
        assert_eq!(press(&mut screen, KeyCode::Char('5')), ScreenTransition::Stay);
        assert_eq!(*screen.notice(), Some(INVALID_MOVE_NOTICE));
        assert!(rendered(&screen).contains(INVALID_MOVE_NOTICE));

        press(&mut screen, KeyCode::Enter);
        assert_eq!(*screen.notice(), None);
        assert_eq!(screen.game().history(), &[(0, 5), (1, 1)]);
    }

    #[test]
    fn test_cursor_keys_then_confirm() {
        let mut screen = screen(GameMode::Pvp);
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Char('s'));
        press(&mut screen, KeyCode::Char(' '));
        assert_eq!(screen.game().history(), &[(0, 5)]);
    }

    #[test]
    fn test_render_shows_turn_and_prompt() {
        let screen = screen(GameMode::Pvp);
        let text = rendered(&screen);
        assert!(text.contains("Turn: Player 1 (X)"));
        assert!(text.contains(MOVE_PROMPT));
        assert!(text.contains("Player vs Player"));
    }

    #[test]
    fn test_cpu_moves_on_tick_and_ignores_keys() {
        let mut screen = screen(GameMode::CpuHard);
        assert_eq!(screen.tick(), ScreenTransition::Stay);
        press(&mut screen, KeyCode::Char('1'));
        assert!(screen.game().is_cpu_turn());
        assert_eq!(press(&mut screen, KeyCode::Char('2')), ScreenTransition::Stay);
        assert_eq!(screen.game().history().len(), 1);

        assert_eq!(screen.tick(), ScreenTransition::Stay);
        assert_eq!(screen.game().history().len(), 2);
        assert!(!screen.game().is_cpu_turn());
    }

    #[test]
    fn test_quit_and_back_always_work() {
        let mut screen = screen(GameMode::CpuEasy);
        assert_eq!(
            press(&mut screen, KeyCode::Char('r')),
            ScreenTransition::Phase(PhaseEvent::Back)
        );
        assert_eq!(
            press(&mut screen, KeyCode::Char('q')),
            ScreenTransition::Phase(PhaseEvent::Quit)
        );
    }

    #[test]
    fn test_winning_move_ends_match() {
        let mut screen = screen(GameMode::Pvp);
        for key in ['1', '4', '2', '5'] {
            assert_eq!(press(&mut screen, KeyCode::Char(key)), ScreenTransition::Stay);
        }
        assert_eq!(
            press(&mut screen, KeyCode::Char('3')),
            ScreenTransition::Phase(PhaseEvent::MatchEnded)
        );
        assert!(matches!(screen.outcome(), Some(MatchOutcome::Winner { seat: 0, .. })));
    }
}
