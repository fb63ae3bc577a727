pub mod alerts_panel;
pub mod dashboard_panel;
pub mod data_panel;
pub mod header;
pub mod layout;
pub mod nav_bar;
pub mod overlay;
pub mod reports_panel;
pub mod status_bar;

use farmkeeper_core::Panel;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Brand green used by the header and active tab
pub const BRAND: Color = Color::Rgb(5, 150, 105);
/// Secondary color for borders and less important text
pub const SECONDARY: Color = Color::DarkGray;
/// Completed / enabled
pub const SUCCESS: Color = Color::Rgb(16, 185, 129);
/// Warnings and in-progress work
pub const WARNING: Color = Color::Rgb(245, 158, 11);
/// Informational items
pub const INFO: Color = Color::Rgb(59, 130, 246);
/// Selection highlight
pub const HIGHLIGHT: Color = Color::Yellow;
/// Dim text color
pub const DIM: Color = Color::Rgb(156, 163, 175);

/// Render the entire UI
pub fn render(f: &mut Frame, app: &App) {
    let (header_area, content_area, nav_area, status_area) = layout::Layout::main(f.area());

    header::render(f, header_area, app);

    // Exactly one panel per frame
    match app.state.panel() {
        Panel::Dashboard(view) => dashboard_panel::render(f, content_area, &view, app),
        Panel::DataEntry(view) => data_panel::render(f, content_area, &view, app),
        Panel::Reports(view) => reports_panel::render(f, content_area, &view),
        Panel::Alerts(view) => alerts_panel::render(f, content_area, &view, app),
    }

    nav_bar::render(f, nav_area, app);
    status_bar::render(f, status_area, app);

    if let Some(ref ack) = app.acknowledgment {
        overlay::render(f, ack);
    }
}

/// Coloured heading card at the top of a panel
pub(crate) fn render_heading(f: &mut Frame, area: Rect, title: &str, subtitle: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.to_string(), Style::default().fg(DIM))),
    ])
    .block(block);

    f.render_widget(paragraph, area);
}

/// Bordered card with a bold title
pub(crate) fn card(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(SECONDARY))
}


#[cfg(test)]
mod tests {
    use super::test_support::render_text;
    use crate::app::App;
    use farmkeeper_core::{AppState, Tab};

    /// A phrase only the given tab's panel renders
    fn marker(tab: Tab) -> &'static str {
        match tab {
            Tab::Dashboard => "Environmental Status",
            Tab::Data => "Daily Data Entry",
            Tab::Reports => "Reports & Analytics",
            Tab::Alerts => "Alert Settings",
        }
    }

    #[test]
    fn test_exactly_one_panel_rendered() {
        for tab in Tab::ALL {
            let app = App::new(AppState::with_tab(tab));
            let text = render_text(&app);

            for other in Tab::ALL {
                assert_eq!(
                    text.contains(marker(other)),
                    other == tab,
                    "tab {tab}: marker for {other} presence wrong"
                );
            }
        }
    }

    #[test]
    fn test_chrome_always_present() {
        let app = App::default();
        let text = render_text(&app);
        assert!(text.contains("FarmKeeper"));
        assert!(text.contains("Smart Poultry Management"));
        assert!(text.contains("Data Entry"));
        assert!(text.contains("NORMAL"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = App::new(AppState::with_tab(Tab::Data));
        let rows = super::test_support::render_rows(&app, 10, 5);
        assert_eq!(rows.len(), 5);
    }
}
