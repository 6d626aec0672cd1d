//! Products App - terminal catalog and administration frontend
//!
//! Run: cargo run -p catalog-tui

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use catalog_client::ClientConfig;
use catalog_tui::{App, core::Action, logger, ui};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

/// Input poll interval; also bounds how long finished requests wait to be applied
const TICK: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let config = ClientConfig::default();
    let client = config.build_http_client()?;
    tracing::info!("Products API at {}", client.base_url());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(Arc::new(client), tx);
    app.spawn_load();

    let res = run_app(&mut terminal, &mut app, &mut rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Action>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key);
        }

        if app.should_quit() {
            return Ok(());
        }

        // Apply finished requests in arrival order
        while let Ok(outcome) = rx.try_recv() {
            app.handle_action(outcome);
        }
    }
}
