use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use farmkeeper_core::{
    Acknowledgment, AlertKind, AppState, FarmConfig, FormField, QuickAction, Tab,
};
use std::time::Duration;
use tracing::debug;

use crate::mode::AppMode;

/// Main application state
pub struct App {
    /// Farm screen state
    pub state: AppState,

    /// Current mode
    pub mode: AppMode,

    /// Form field the cursor is on (data tab)
    pub focused_field: FormField,

    /// Highlighted alert switch (alerts tab)
    pub selected_alert: usize,

    /// Highlighted quick action (dashboard tab)
    pub selected_action: usize,

    /// Status message (shown in status bar)
    pub status_message: Option<String>,

    /// Pending confirmation overlay
    pub acknowledgment: Option<Acknowledgment>,

    /// Show type hints under form fields
    pub show_hints: bool,

    /// Should quit?
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::new())
    }
}

impl App {
    /// Create a new App around existing state
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            mode: AppMode::Normal,
            focused_field: FormField::SelectedShed,
            selected_alert: 0,
            selected_action: 0,
            status_message: None,
            acknowledgment: None,
            show_hints: true,
            should_quit: false,
        }
    }

    /// Create an App from loaded config
    pub fn from_config(config: &FarmConfig) -> Self {
        let mut app = Self::new(AppState::with_tab(config.ui.initial_tab));
        app.show_hints = config.ui.show_hints;
        app
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn selected_alert_kind(&self) -> AlertKind {
        AlertKind::ALL[self.selected_alert % AlertKind::ALL.len()]
    }

    pub fn selected_quick_action(&self) -> QuickAction {
        QuickAction::ALL[self.selected_action % QuickAction::ALL.len()]
    }

    /// Switch tabs from the keyboard
    pub fn switch_tab(&mut self, tab: Tab) {
        self.state.select_tab(tab);
        self.status_message = None;
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl-C quits from any mode
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::Edit => self.handle_edit_mode(key),
            AppMode::Acknowledge => self.handle_acknowledge_mode(key),
        }
    }

    /// Handle normal mode keys
    fn handle_normal_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            KeyCode::Char('1') => self.switch_tab(Tab::Dashboard),
            KeyCode::Char('2') => self.switch_tab(Tab::Data),
            KeyCode::Char('3') => self.switch_tab(Tab::Reports),
            KeyCode::Char('4') => self.switch_tab(Tab::Alerts),

            KeyCode::Tab => self.switch_tab(self.state.active_tab().next()),
            KeyCode::BackTab => self.switch_tab(self.state.active_tab().prev()),

            _ => match self.state.active_tab() {
                Tab::Dashboard => self.handle_dashboard_keys(key),
                Tab::Data => self.handle_data_keys(key),
                Tab::Reports => self.handle_reports_keys(key),
                Tab::Alerts => self.handle_alerts_keys(key),
            },
        }
    }

    fn handle_dashboard_keys(&mut self, key: KeyEvent) {
        let count = QuickAction::ALL.len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_action = (self.selected_action + count - 1) % count;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_action = (self.selected_action + 1) % count;
            }
            KeyCode::Enter => self.trigger_quick_action(self.selected_quick_action()),
            _ => {}
        }
    }

    /// Run a dashboard quick action
    pub fn trigger_quick_action(&mut self, action: QuickAction) {
        match action.target() {
            Some(tab) => self.switch_tab(tab),
            None => {
                debug!(action = action.label(), "inert quick action");
                self.set_status(format!("{} is not available yet", action.label()));
            }
        }
    }

    fn handle_data_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.focused_field = self.focused_field.next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.focused_field = self.focused_field.prev();
            }
            KeyCode::Enter | KeyCode::Char('i') => {
                if self.focused_field.is_editable() {
                    self.mode = AppMode::Edit;
                    self.status_message = None;
                } else {
                    self.set_status(format!("{} is fixed for today's log", self.focused_field));
                }
            }
            KeyCode::Char('s') => self.submit(),
            _ => {}
        }
    }

    /// Submit the daily log and show the confirmation overlay
    pub fn submit(&mut self) {
        let ack = self.state.submit_log();
        self.acknowledgment = Some(ack);
        self.mode = AppMode::Acknowledge;
    }

    fn handle_reports_keys(&mut self, key: KeyEvent) {
        let links = self.state.reports().links;
        let link = match key.code {
            KeyCode::Char('e') => links[0],
            KeyCode::Char('m') => links[1],
            _ => return,
        };
        self.set_status(format!("{} is not available yet", link));
    }

    fn handle_alerts_keys(&mut self, key: KeyEvent) {
        let count = AlertKind::ALL.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_alert = (self.selected_alert + 1).min(count - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_alert = self.selected_alert.saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let kind = self.selected_alert_kind();
                let enabled = self.state.toggle_alert_setting(kind);
                let word = if enabled { "on" } else { "off" };
                self.set_status(format!("{} {}", kind.label(), word));
            }
            _ => {}
        }
    }

    /// Handle edit mode keys
    fn handle_edit_mode(&mut self, key: KeyEvent) {
        let field = self.focused_field;
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = AppMode::Normal;
            }

            KeyCode::Backspace => {
                let mut value = self.state.form().get(field).to_string();
                value.pop();
                self.state.update_form_field(field, value);
            }

            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = self.state.form().get(field).to_string();
                value.push(c);
                self.state.update_form_field(field, value);
            }

            _ => {}
        }
    }

    /// Any key dismisses the overlay
    fn handle_acknowledge_mode(&mut self, _key: KeyEvent) {
        self.acknowledgment = None;
        self.mode = AppMode::Normal;
    }

    /// Poll for events with timeout
    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}
