use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{BRAND, WARNING};
use crate::app::App;

/// Render the app header: title on the left, bell and profile on the right
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(
            "FarmKeeper",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Smart Poultry Management", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(title), inner);

    // Badge dot only while there are notifications
    let mut icons = vec![Span::raw("🔔")];
    if app.state.has_unread() {
        icons.push(Span::styled("●", Style::default().fg(WARNING)));
    }
    icons.push(Span::raw(" 👤 "));

    f.render_widget(
        Paragraph::new(Line::from(icons)).alignment(Alignment::Right),
        inner,
    );
}
