use farmkeeper_core::Acknowledgment;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::Layout;
use super::{DIM, SUCCESS};

/// Render the confirmation popup over the whole frame
pub fn render(f: &mut Frame, ack: &Acknowledgment) {
    let popup_area = Layout::centered(f.area(), 44, 7);

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", ack.title))
        .title_style(Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SUCCESS));

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(ack.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[ OK ] press any key", Style::default().fg(DIM))),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::mode::AppMode;
    use crate::ui::test_support::render_text;
    use farmkeeper_core::{FormField, Tab};

    #[test]
    fn test_submit_overlay_over_dashboard() {
        let mut app = App::default();
        app.switch_tab(Tab::Data);
        app.state.update_form_field(FormField::BirdCount, "");
        app.submit();

        assert_eq!(app.mode, AppMode::Acknowledge);
        let text = render_text(&app);
        assert!(text.contains("Success"));
        assert!(text.contains("Daily log saved successfully!"));
        // dashboard underneath, not the form
        assert!(text.contains("Recent Activity"));
        assert!(!text.contains("Daily Data Entry"));
    }

    #[test]
    fn test_no_overlay_by_default() {
        let text = render_text(&App::default());
        assert!(!text.contains("Daily log saved successfully!"));
    }
}
