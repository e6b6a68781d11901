//! Terminal UI for TicTaco.

mod app;
mod board_view;
mod keymap;
mod screen;
mod screens;

pub use app::App;
pub use board_view::{board_lines, cell_width};
pub use keymap::KeyAction;
pub use screen::{Screen, ScreenTransition};
pub use screens::{INVALID_MOVE_NOTICE, MOVE_PROMPT, outcome_message};

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::GameConfig;

/// Takes over the terminal, runs the app until the player quits, and
/// restores the terminal even when the app fails.
#[instrument(skip(config))]
pub fn run(config: GameConfig) -> anyhow::Result<()> {
    info!("Starting TicTaco TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}
