use farmkeeper_core::{DashboardView, LogStatus, QuickAction};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::layout::Layout;
use super::{card, DIM, HIGHLIGHT, INFO, SUCCESS, WARNING};
use crate::app::App;

/// Dot colour for an activity status
fn status_color(status: LogStatus) -> Color {
    match status {
        LogStatus::Completed => SUCCESS,
        LogStatus::InProgress => WARNING,
        LogStatus::Checked => INFO,
    }
}

/// Render the dashboard tab
pub fn render(f: &mut Frame, area: Rect, view: &DashboardView<'_>, app: &App) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Stat cards
            Constraint::Length(4), // Environmental status
            Constraint::Length(3), // Quick actions
            Constraint::Min(0),    // Recent activity
        ])
        .split(area);

    render_stats(f, chunks[0], view);
    render_environment(f, chunks[1], view);
    render_quick_actions(f, chunks[2], app);
    render_recent_activity(f, chunks[3], view);
}

fn render_stats(f: &mut Frame, area: Rect, view: &DashboardView<'_>) {
    let cols = Layout::columns(area, 2);

    let birds = Paragraph::new(vec![
        Line::from(Span::styled(
            view.total_birds(),
            Style::default().fg(INFO).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(DashboardView::BIRDS_TREND, Style::default().fg(DIM))),
    ])
    .block(card("Total Birds"));
    f.render_widget(birds, cols[0]);

    let health = Paragraph::new(vec![
        Line::from(Span::styled(
            DashboardView::HEALTH_RATE,
            Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(DashboardView::HEALTH_NOTE, Style::default().fg(DIM))),
    ])
    .block(card("Health Rate"));
    f.render_widget(health, cols[1]);
}

fn render_environment(f: &mut Frame, area: Rect, view: &DashboardView<'_>) {
    let block = card("Environmental Status");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let readings = [
        (view.temperature(), "Temperature", Color::Rgb(255, 107, 53)),
        (view.humidity(), "Humidity", Color::Rgb(78, 205, 196)),
        (view.avg_weight(), "Avg Weight", Color::Rgb(69, 183, 209)),
    ];

    for ((value, label, color), col) in readings.into_iter().zip(Layout::columns(inner, 3)) {
        let cell = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(DIM))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(cell, col);
    }
}

fn render_quick_actions(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected_quick_action();

    let mut spans = Vec::new();
    for action in QuickAction::ALL {
        let style = if action == selected {
            Style::default()
                .fg(Color::Black)
                .bg(HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else if action.target().is_some() {
            Style::default()
        } else {
            Style::default().fg(DIM)
        };
        spans.push(Span::styled(format!(" {} ", action.label()), style));
        spans.push(Span::raw("  "));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(card("Quick Actions")),
        area,
    );
}

fn render_recent_activity(f: &mut Frame, area: Rect, view: &DashboardView<'_>) {
    let items: Vec<ListItem> = view
        .recent_logs
        .iter()
        .map(|log| {
            // one row per log
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(status_color(log.status))),
                Span::styled(log.title(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("   {}", log.time), Style::default().fg(DIM)),
                Span::styled("  ›", Style::default().fg(DIM)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(card("Recent Activity")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{render_rows, render_text};

    #[test]
    fn test_dashboard_content() {
        let app = App::default();
        let text = render_text(&app);

        assert!(text.contains("5,847"));
        assert!(text.contains("+2.3% from yesterday"));
        assert!(text.contains("99.8%"));
        assert!(text.contains("24.5°C"));
        assert!(text.contains("68%"));
        assert!(text.contains("1.8kg"));
        assert!(text.contains("Log Data"));
        assert!(text.contains("Biosecurity"));
        assert!(text.contains("Feeding - Shed A"));
        assert!(text.contains("Health - Shed B"));
        assert!(text.contains("Cleaning - Shed C"));
        assert!(text.contains("10:00 AM"));
    }

    #[test]
    fn test_all_recent_logs_fit_small_terminal() {
        let rows = render_rows(&App::default(), 80, 24);
        let text = rows.join("\n");
        assert!(text.contains("Feeding - Shed A   08:30 AM"));
        assert!(text.contains("Cleaning - Shed C   10:00 AM"));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(LogStatus::Completed), SUCCESS);
        assert_eq!(status_color(LogStatus::InProgress), WARNING);
        assert_eq!(status_color(LogStatus::Checked), INFO);
    }
}
