//! Terminal UI for replayable tic-tac-toe.
//!
//! All state changes happen synchronously inside the key handler, and
//! every change is followed by a full redraw from current state. There
//! is nothing async here, so the loop is a plain blocking poll.

mod app;
mod input;
mod ui;

pub use app::{App, Pane, SortOrder};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;
use tracing::{info, instrument};

/// Runs the TUI until the user quits.
///
/// Sets up the terminal, drives the event loop, and restores the
/// terminal on exit.
#[instrument]
pub fn run(sort: SortOrder) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, App::new(sort));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
            if app.should_quit() {
                info!("Exiting TUI");
                return Ok(());
            }
        }
    }
}
