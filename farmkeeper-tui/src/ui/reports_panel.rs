use farmkeeper_core::ReportsView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::layout::Layout;
use super::{card, render_heading, DIM, INFO, SUCCESS};

const TEAL: Color = Color::Rgb(20, 184, 166);

/// Render the reports tab. Everything here is display only.
pub fn render(f: &mut Frame, area: Rect, view: &ReportsView) {
    let (heading_area, body_area) = Layout::with_heading(area);
    render_heading(
        f,
        heading_area,
        ReportsView::TITLE,
        ReportsView::SUBTITLE,
        TEAL,
    );

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Report cards
            Constraint::Min(3),    // Chart placeholder
            Constraint::Length(4), // Report links
        ])
        .split(body_area);

    let cols = Layout::columns(chunks[0], 2);
    let cards = [
        ("Weekly Growth 📈", view.weekly_growth.to_string(), view.growth_note, SUCCESS),
        (
            "Feed Efficiency 📊",
            view.feed_conversion_ratio.to_string(),
            view.fcr_note,
            INFO,
        ),
    ];
    for ((title, value, note, color), col) in cards.into_iter().zip(cols) {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(note, Style::default().fg(DIM))),
        ])
        .block(card(title));
        f.render_widget(paragraph, col);
    }

    let chart = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(view.chart_placeholder, Style::default().fg(DIM))),
    ])
    .alignment(Alignment::Center)
    .block(card("Performance Chart"));
    f.render_widget(chart, chunks[1]);

    let keys = ["e", "m"];
    let items: Vec<ListItem> = view
        .links
        .iter()
        .zip(keys)
        .map(|(link, key)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}  ", key), Style::default().fg(DIM)),
                Span::raw(*link),
                Span::styled("  ›", Style::default().fg(DIM)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(card("Export")), chunks[2]);
}
