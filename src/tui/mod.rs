//! Terminal window for the task manager.
//!
//! The layout follows the classic form-over-table arrangement: input fields
//! on top, the action bar and search box below them, the task table under
//! that and a status line at the bottom.

pub mod app;
pub mod ui;

use crate::libs::manager::TaskManager;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Runs the window until the user quits.
///
/// Raw mode and the alternate screen are undone on every exit path,
/// including a failed setup.
pub fn run_tui(manager: &mut TaskManager) -> Result<()> {
    enable_raw_mode()?;
    let res = run_in_alternate_screen(manager);
    let restored = disable_raw_mode();

    res?;
    restored.map_err(Into::into)
}

fn run_in_alternate_screen(manager: &mut TaskManager) -> io::Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    let res = run_terminal(manager);
    let left = execute!(io::stdout(), LeaveAlternateScreen);

    res.and(left)
}

fn run_terminal(manager: &mut TaskManager) -> io::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = App::new(manager);
    let res = run_app(&mut terminal, &mut app);
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
