//! App controller: the phase machine driving the active screen.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, error, info, instrument};

use super::screen::{Screen, ScreenTransition};
use super::screens::{
    GameOverScreen, InGameScreen, MainMenuScreen, ModeSelectScreen, outcome_message,
};
use crate::config::GameConfig;
use crate::controller::{GamePhase, Match, PhaseEvent};
use crate::games::tictactoe::Board;

/// How long to wait for a key before looping again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Seat of the configured human in every mode.
const HUMAN_SEAT: usize = 0;

/// Active screen; always matches the current [`GamePhase`].
#[derive(Debug)]
enum ActiveScreen {
    MainMenu(MainMenuScreen),
    ModeSelect(ModeSelectScreen),
    InGame(Box<InGameScreen>),
    GameOver(GameOverScreen),
}

impl ActiveScreen {
    fn screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::ModeSelect(s) => s,
            ActiveScreen::InGame(s) => s.as_ref(),
            ActiveScreen::GameOver(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::ModeSelect(s) => s,
            ActiveScreen::InGame(s) => s.as_mut(),
            ActiveScreen::GameOver(s) => s,
        }
    }
}

/// Owns the configuration, the phase and the screen for that phase.
///
/// Call [`App::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct App {
    config: GameConfig,
    phase: GamePhase,
    #[getter(skip)]
    screen: ActiveScreen,
}

impl App {
    /// Starts at the main menu.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        info!("Creating App");
        let screen = ActiveScreen::MainMenu(MainMenuScreen::new(config.player().to_figure()));
        Self {
            config,
            phase: GamePhase::default(),
            screen,
        }
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.screen().render(frame);
    }

    /// Runs the event loop until the phase machine exits.
    ///
    /// CPU moves are played as soon as it is a CPU's turn, before waiting for
    /// input.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        while !self.phase.is_terminal() {
            terminal.draw(|f| self.render(f))?;

            let transition = self.screen.screen_mut().tick();
            if transition != ScreenTransition::Stay {
                self.apply_transition(transition);
                continue;
            }

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                let transition = self.screen.screen_mut().handle_key(key);
                self.apply_transition(transition);
            }
        }

        info!("Event loop finished");
        Ok(())
    }

    /// Feeds a transition to the phase machine and swaps in the screen for
    /// the resulting phase.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) {
        let ScreenTransition::Phase(event) = transition else {
            return;
        };

        let next = self.phase.on(event);
        if next == self.phase {
            return;
        }
        debug!(from = %self.phase, to = %next, "Swapping screen");
        self.phase = next;

        match next {
            GamePhase::InMenu => self.show_menu(),
            GamePhase::ModeSelection => {
                self.screen = ActiveScreen::ModeSelect(ModeSelectScreen::new());
            }
            GamePhase::InGame => {
                let PhaseEvent::ModeChosen(mode) = event else {
                    error!(%event, "Entered a game without a mode");
                    self.phase = self.phase.on(PhaseEvent::Back);
                    self.show_menu();
                    return;
                };
                match Match::for_mode(mode, &self.config) {
                    Ok(game) => {
                        info!(%mode, "Starting match");
                        self.screen = ActiveScreen::InGame(Box::new(InGameScreen::new(mode, game)));
                    }
                    Err(e) => {
                        error!(error = %e, "Could not seat the match");
                        self.phase = self.phase.on(PhaseEvent::Back);
                        self.show_menu();
                    }
                }
            }
            GamePhase::GameOver => {
                let (message, board) = match &self.screen {
                    ActiveScreen::InGame(s) => (
                        s.outcome()
                            .map(|outcome| outcome_message(outcome, HUMAN_SEAT))
                            .unwrap_or_default(),
                        s.game().board().clone(),
                    ),
                    _ => (String::new(), Board::new()),
                };
                info!(%message, "Match over");
                self.screen = ActiveScreen::GameOver(GameOverScreen::new(message, board));
            }
            GamePhase::Exited => info!("Quitting"),
        }
    }

    fn show_menu(&mut self) {
        self.screen =
            ActiveScreen::MainMenu(MainMenuScreen::new(self.config.player().to_figure()));
    }
}
