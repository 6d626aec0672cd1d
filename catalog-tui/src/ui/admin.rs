//! Administration view: product table beside the create/edit form

use ratatui::{prelude::*, widgets::*};
use shared::Product;
use tui_input::Input;

use crate::app::{App, Focus};
use crate::core::{FormField, FormMode, ProductForm};

const EMPTY_MESSAGE: &str = "No products to manage.";

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let table_focused = app.focus == Focus::Table;
    render_table(
        f,
        chunks[0],
        app.store.products(),
        &mut app.table_state,
        table_focused,
    );
    render_form(f, chunks[1], &app.form, app.store.form_mode(), !table_focused);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

pub fn render_table(
    f: &mut Frame,
    area: Rect,
    products: &[Product],
    state: &mut TableState,
    focused: bool,
) {
    let block = Block::default()
        .title(" Product list ")
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    if products.is_empty() {
        let placeholder = Paragraph::new(EMPTY_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(["Name", "Price", "Actions"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    let rows = products.iter().map(|p| {
        Row::new([
            Cell::from(p.name.as_str()),
            Cell::from(p.display_price()),
            Cell::from(Line::from(vec![
                Span::styled("e Edit", Style::default().fg(Color::Blue)),
                Span::raw("  "),
                Span::styled("d Delete", Style::default().fg(Color::Red)),
            ])),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(12),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, state);
}

/// Single-line input box; returns the cursor position when focused
fn render_input(
    f: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    focused: bool,
) -> Option<(u16, u16)> {
    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let paragraph = Paragraph::new(input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(format!(" {label} ")));
    f.render_widget(paragraph, area);

    focused.then(|| {
        (
            area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        )
    })
}

pub fn render_form(
    f: &mut Frame,
    area: Rect,
    form: &ProductForm,
    mode: FormMode,
    focused: bool,
) {
    let (title, submit) = match mode {
        FormMode::Create => (" Create product ", "Create"),
        FormMode::Edit(_) => (" Edit product ", "Save changes"),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Description
            Constraint::Length(3), // Price
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    let mut cursor = None;
    for (i, field) in FormField::ALL.into_iter().enumerate() {
        let field_focused = focused && form.focus() == field;
        if let Some(pos) = render_input(f, rows[i], field.label(), form.input(field), field_focused) {
            cursor = Some(pos);
        }
    }

    let mut buttons = vec![
        Span::styled(
            format!(" Enter {submit} "),
            Style::default().fg(Color::White).bg(Color::Blue),
        ),
    ];
    // Cancel only exists while editing
    if matches!(mode, FormMode::Edit(_)) {
        buttons.push(Span::raw("  "));
        buttons.push(Span::styled(
            " Ctrl+X Cancel ",
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(buttons)), rows[3]);

    if let Some(pos) = cursor {
        f.set_cursor_position(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fake::product;
    use crate::ui::testing;

    #[test]
    fn test_table_rows() {
        let products = vec![
            product(1, "Pan", None, "2.5"),
            product(2, "Queso", Some("Curado"), "12"),
        ];
        let mut state = TableState::default().with_selected(Some(0));
        let lines = testing::render(60, 8, |f| {
            let area = f.area();
            render_table(f, area, &products, &mut state, true)
        });
        let text = lines.join("\n");

        assert!(text.contains("Name"));
        assert!(text.contains("Pan"));
        assert!(text.contains("$2.50"));
        assert!(text.contains("$12.00"));
        assert!(text.contains("> Pan"));
    }

    #[test]
    fn test_empty_table_placeholder() {
        let mut state = TableState::default();
        let lines = testing::render(60, 5, |f| {
            let area = f.area();
            render_table(f, area, &[], &mut state, false)
        });
        assert!(lines.iter().any(|l| l.contains(EMPTY_MESSAGE)));
    }

    #[test]
    fn test_form_create_mode_has_no_cancel() {
        let form = ProductForm::new();
        let lines = testing::render(50, 14, |f| {
            let area = f.area();
            render_form(f, area, &form, FormMode::Create, false)
        });
        let text = lines.join("\n");

        assert!(text.contains("Create product"));
        assert!(!text.contains("Cancel"));
    }

    #[test]
    fn test_form_edit_mode_shows_values() {
        let mut form = ProductForm::new();
        form.load(&product(2, "Queso", None, "12"));
        let lines = testing::render(50, 14, |f| {
            let area = f.area();
            render_form(f, area, &form, FormMode::Edit(2), true)
        });
        let text = lines.join("\n");

        assert!(text.contains("Edit product"));
        assert!(text.contains("Save changes"));
        assert!(text.contains("Cancel"));
        assert!(text.contains("Queso"));
        assert!(text.contains("12"));
    }
}
