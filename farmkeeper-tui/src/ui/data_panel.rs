use farmkeeper_core::{DataEntryView, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::layout::Layout;
use super::{card, render_heading, DIM, HIGHLIGHT, WARNING};
use crate::app::App;
use crate::mode::AppMode;

const PURPLE: Color = Color::Rgb(139, 92, 246);

/// Render the data entry tab
pub fn render(f: &mut Frame, area: Rect, view: &DataEntryView<'_>, app: &App) {
    let (heading_area, body_area) = Layout::with_heading(area);
    render_heading(
        f,
        heading_area,
        DataEntryView::TITLE,
        DataEntryView::SUBTITLE,
        PURPLE,
    );

    // Rows of the focused field's block, so it can be scrolled into view
    let mut lines = Vec::new();
    let mut focus = (0, 0);
    for field in FormField::ALL {
        let start = lines.len();
        lines.extend(field_lines(view, app, field));
        if field == app.focused_field {
            focus = (start, lines.len());
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", DataEntryView::SUBMIT_LABEL),
            Style::default()
                .fg(Color::Black)
                .bg(PURPLE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (s)", Style::default().fg(DIM)),
    ]));
    if app.show_hints {
        lines.push(summary_line(view));
    }

    // The last field carries the submit button along with it
    if app.focused_field == FormField::Observations {
        focus.1 = lines.len();
    }

    let inner_height = usize::from(body_area.height.saturating_sub(2));
    let offset = scroll_offset(focus, inner_height);

    let form = Paragraph::new(lines)
        .block(card("Shed Information"))
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    f.render_widget(form, body_area);
}

/// First visible row that keeps rows `start..end` on screen, top first
fn scroll_offset((start, end): (usize, usize), height: usize) -> usize {
    end.saturating_sub(height).min(start)
}

/// One-line verdict of the advisory checks, shown under the button
fn summary_line(view: &DataEntryView<'_>) -> Line<'static> {
    match view.form.parse() {
        Ok(_) => Line::from(Span::styled(
            "  All values look right",
            Style::default().fg(Color::Green),
        )),
        Err(problems) => {
            let noun = if problems.len() == 1 {
                "field needs"
            } else {
                "fields need"
            };
            Line::from(Span::styled(
                format!("  {} {} attention", problems.len(), noun),
                Style::default().fg(WARNING),
            ))
        }
    }
}

/// Label line, value line(s), and an optional hint line for one field
fn field_lines<'a>(view: &DataEntryView<'a>, app: &App, field: FormField) -> Vec<Line<'a>> {
    let focused = app.focused_field == field;
    let editing = focused && app.mode == AppMode::Edit;
    let raw = view.form.get(field);

    let (marker, label_style) = if focused {
        (
            "▶ ",
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().add_modifier(Modifier::BOLD))
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(field.label(), label_style),
    ])];

    if raw.is_empty() && !editing {
        lines.push(Line::from(Span::styled(
            format!("    {}", field.placeholder()),
            Style::default().fg(DIM),
        )));
    } else {
        let mut value_lines: Vec<&str> = raw.split('\n').collect();
        let last = value_lines.pop().unwrap_or_default();
        for text in value_lines {
            lines.push(Line::from(format!("    {}", text)));
        }

        let mut spans = vec![Span::raw(format!("    {}", last))];
        if editing {
            spans.push(Span::styled("_", Style::default().fg(Color::Green)));
        }
        if field == FormField::SelectedShed {
            spans.push(Span::styled("  ▼", Style::default().fg(DIM)));
        }
        lines.push(Line::from(spans));
    }

    if app.show_hints {
        if let Err(problem) = view.form.check(field) {
            lines.push(Line::from(Span::styled(
                format!("    ! {}", problem),
                Style::default().fg(WARNING),
            )));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{render_rows, render_text};
    use farmkeeper_core::{AppState, Tab};

    fn data_app() -> App {
        App::new(AppState::with_tab(Tab::Data))
    }

    #[test]
    fn test_form_shows_labels_and_placeholders() {
        let text = render_text(&data_app());
        assert!(text.contains("Daily Data Entry"));
        assert!(text.contains("Shed A - Broilers (Week 4)"));
        for field in FormField::ALL {
            assert!(text.contains(field.label()), "missing {}", field.label());
        }
        assert!(text.contains("1,250"));
        assert!(text.contains("Save Daily Log"));
    }

    #[test]
    fn test_typed_value_replaces_placeholder() {
        let mut app = data_app();
        app.state.update_form_field(FormField::WaterConsumed, "777");
        let text = render_text(&app);
        assert!(text.contains("777"));
        assert!(!text.contains("1,200"));
    }

    #[test]
    fn test_hint_for_non_numeric_text() {
        let mut app = data_app();
        app.state.update_form_field(FormField::BirdCount, "many");
        let text = render_text(&app);
        assert!(text.contains("Bird Count should be a whole number, got 'many'"));

        app.show_hints = false;
        let text = render_text(&app);
        assert!(text.contains("many"));
        assert!(!text.contains("should be a whole number"));
    }

    #[test]
    fn test_edit_cursor_on_focused_field() {
        let mut app = data_app();
        app.focused_field = FormField::Mortality;
        app.mode = AppMode::Edit;
        app.state.update_form_field(FormField::Mortality, "4");
        let text = render_text(&app);
        assert!(text.contains("▶ Mortality"));
        assert!(text.contains("4_"));
    }

    #[test]
    fn test_focused_observations_visible_on_small_terminal() {
        let mut app = data_app();
        app.focused_field = FormField::Observations;
        app.mode = AppMode::Edit;
        app.state.update_form_field(FormField::Observations, "hens quiet");

        let text = render_rows(&app, 80, 24).join("\n");
        assert!(text.contains("▶ Behavioral Observations"));
        assert!(text.contains("hens quiet_"));
        assert!(text.contains("Save Daily Log"));
    }

    #[test]
    fn test_top_field_visible_on_small_terminal() {
        let mut app = data_app();
        app.state.update_form_field(FormField::Observations, "hens quiet");
        let text = render_rows(&app, 80, 24).join("\n");
        assert!(text.contains("▶ Select Shed"));
        assert!(text.contains("Shed A - Broilers (Week 4)"));
    }

    #[test]
    fn test_scroll_offset() {
        // fits already
        assert_eq!(scroll_offset((2, 4), 11), 0);
        // bottom block pulled up
        assert_eq!(scroll_offset((10, 15), 11), 4);
        // block taller than the view keeps its top row
        assert_eq!(scroll_offset((3, 20), 5), 3);
    }

    #[test]
    fn test_summary_line_counts_problems() {
        let mut app = data_app();
        let text = render_text(&app);
        assert!(text.contains("All values look right"));

        app.state.update_form_field(FormField::BirdCount, "many");
        app.state.update_form_field(FormField::FeedConsumed, "-2");
        let text = render_text(&app);
        assert!(text.contains("2 fields need attention"));

        app.show_hints = false;
        let text = render_text(&app);
        assert!(!text.contains("need attention"));
    }
}
