//! Customer catalog: one card per product, read-only

use ratatui::{prelude::*, widgets::*};
use shared::Product;

const EMPTY_MESSAGE: &str = "No products to show.";

/// Card lines: name, description when present, price
fn card(product: &Product) -> ListItem<'_> {
    let mut lines = vec![Line::from(Span::styled(
        product.name.as_str(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(Span::styled(
            description,
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(Span::styled(
        product.display_price(),
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::raw(" ")));
    ListItem::new(lines)
}

pub fn render(f: &mut Frame, area: Rect, products: &[Product]) {
    let block = Block::default()
        .title(" Available products ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if products.is_empty() {
        let placeholder = Paragraph::new(EMPTY_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let cards: Vec<ListItem> = products.iter().map(card).collect();
    f.render_widget(List::new(cards).block(block), area);
}
