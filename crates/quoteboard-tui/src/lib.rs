//! quoteboard-tui - TUI frontend for quoteboard using Ratatui

pub mod app;
pub mod components;
pub mod theme;
pub mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quoteboard_core::models::ColorScheme;
use quoteboard_core::PricingEngine;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

/// Run the TUI application until the user quits
pub fn run(engine: PricingEngine, color_scheme: ColorScheme) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine, color_scheme);
    let mut ui = ui::Ui::new();

    tracing::debug!(services = app.engine.services().count(), "starting TUI");

    let result = run_loop(&mut terminal, &mut app, &mut ui);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, ui: &mut ui::Ui) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        app.toast_manager.clear_expired();

        terminal.draw(|f| ui.render(f, app))?;

        // Timeout keeps toasts expiring without input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
