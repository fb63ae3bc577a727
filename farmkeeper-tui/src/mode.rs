/// Input modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Switch tabs, move selections, trigger buttons
    #[default]
    Normal,

    /// Typing into the focused form field
    Edit,

    /// Success overlay is showing; any key dismisses it
    Acknowledge,
}

impl AppMode {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            AppMode::Normal => "NORMAL",
            AppMode::Edit => "EDIT",
            AppMode::Acknowledge => "NOTICE",
        }
    }

    /// Get color for status bar (in ratatui Color enum)
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AppMode::Normal => Color::Cyan,
            AppMode::Edit => Color::Green,
            AppMode::Acknowledge => Color::Yellow,
        }
    }
}
