use chrono::Local;
use farmkeeper_core::Tab;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{DIM, HIGHLIGHT};
use crate::app::App;
use crate::mode::AppMode;

/// Keybind hints for the current mode and tab
fn hints(app: &App) -> &'static str {
    match app.mode {
        AppMode::Edit => "type to edit | Enter/Esc: done",
        AppMode::Acknowledge => "any key: continue",
        AppMode::Normal => match app.state.active_tab() {
            Tab::Dashboard => "1-4/Tab: tabs | ←→: action | Enter: run | q: quit",
            Tab::Data => "1-4/Tab: tabs | j/k: field | i: edit | s: save | q: quit",
            Tab::Reports => "1-4/Tab: tabs | e: export | m: monthly | q: quit",
            Tab::Alerts => "1-4/Tab: tabs | j/k: select | Space: toggle | q: quit",
        },
    }
}

/// Render the status line (bottom row)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let now = Local::now();
    let time_str = now.format("%H:%M").to_string();

    let message = app
        .status_message
        .as_deref()
        .unwrap_or_else(|| hints(app));
    let message_style = if app.status_message.is_some() {
        Style::default().fg(HIGHLIGHT)
    } else {
        Style::default().fg(DIM)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.mode.display_name()),
            Style::default()
                .fg(Color::Black)
                .bg(app.mode.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(message.to_string(), message_style),
    ];

    // Right-aligned clock
    let width = area.width as usize;
    let current_len: usize = spans.iter().map(|s| s.width()).sum();
    let padding = width.saturating_sub(current_len + time_str.len() + 1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        format!("{} ", time_str),
        Style::default().fg(DIM),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_text;

    #[test]
    fn test_status_message_replaces_hints() {
        let mut app = App::default();
        assert!(render_text(&app).contains("Enter: run"));

        app.set_status("Take Photo is not available yet");
        let text = render_text(&app);
        assert!(text.contains("Take Photo is not available yet"));
        assert!(!text.contains("Enter: run"));
    }

    #[test]
    fn test_edit_mode_indicator() {
        let mut app = App::default();
        app.mode = AppMode::Edit;
        let text = render_text(&app);
        assert!(text.contains(" EDIT "));
        assert!(text.contains("Enter/Esc: done"));
    }
}
