use farmkeeper_core::{AlertKind, AlertsView, NotificationKind};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use super::layout::Layout;
use super::{card, render_heading, DIM, HIGHLIGHT, INFO, SECONDARY, SUCCESS, WARNING};
use crate::app::App;

const RED: Color = Color::Rgb(239, 68, 68);

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Warning => WARNING,
        NotificationKind::Info => INFO,
    }
}

/// Render the alerts tab
pub fn render(f: &mut Frame, area: Rect, view: &AlertsView<'_>, app: &App) {
    let (heading_area, body_area) = Layout::with_heading(area);
    render_heading(f, heading_area, AlertsView::TITLE, AlertsView::SUBTITLE, RED);

    // Two rows per notification plus borders
    let list_height = (view.notifications.len() as u16) * 2 + 2;
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(list_height),
            Constraint::Length(AlertKind::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(body_area);

    let notifications: Vec<ListItem> = view
        .notifications
        .iter()
        .map(|notification| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(kind_color(notification.kind))),
                    Span::styled(
                        notification.message.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", notification.time),
                    Style::default().fg(DIM),
                )),
            ])
        })
        .collect();
    f.render_widget(
        List::new(notifications).block(card("Notifications")),
        chunks[0],
    );

    let selected = app.selected_alert_kind();
    let settings: Vec<ListItem> = AlertKind::ALL
        .iter()
        .map(|kind| {
            let enabled = view.settings.get(*kind);
            let is_selected = *kind == selected;

            let label_style = if is_selected {
                Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let (switch, switch_style) = if enabled {
                ("[ ON  ]", Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD))
            } else {
                ("[ OFF ]", Style::default().fg(SECONDARY))
            };

            ListItem::new(Line::from(vec![
                Span::styled(if is_selected { "▶ " } else { "  " }, label_style),
                Span::styled(format!("{:<22}", kind.label()), label_style),
                Span::styled(switch, switch_style),
            ]))
        })
        .collect();
    f.render_widget(List::new(settings).block(card("Alert Settings")), chunks[1]);
}
