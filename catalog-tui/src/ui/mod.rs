//! Terminal rendering
//!
//! Header with the view tabs, the active view, and the log panel.

pub mod admin;
pub mod catalog;

use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::{App, Focus};
use crate::core::ViewMode;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(8),     // Active view
            Constraint::Length(8),  // Logs
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);

    match app.store.view_mode() {
        ViewMode::Catalog => catalog::render(f, chunks[1], app.store.products()),
        ViewMode::Admin => admin::render(f, chunks[1], app),
    }

    draw_logs(f, chunks[2], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let selected = match app.store.view_mode() {
        ViewMode::Catalog => 0,
        ViewMode::Admin => 1,
    };
    let titles = [ViewMode::Catalog, ViewMode::Admin]
        .into_iter()
        .enumerate()
        .map(|(i, mode)| Line::from(format!(" {} {} ", i + 1, mode.title())));

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .title(" Products App ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(tabs, area);

    // Help hint on the right side of the header
    let hint = if app.store.view_mode() == ViewMode::Admin && app.focus == Focus::Form {
        "Esc back to table "
    } else {
        "1/2 switch view, q quit "
    };
    let help = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    let inner = area.inner(Margin::new(1, 1));
    f.render_widget(help, inner);
}

fn draw_logs(f: &mut Frame, area: Rect, app: &App) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    /// Rows of a rendered buffer as plain text
    pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn render<F>(width: u16, height: u16, draw: F) -> Vec<String>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        buffer_lines(terminal.backend().buffer())
    }
}
