use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FarmError;

/// Tabs of the main screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Stats, environment, quick actions, recent activity
    #[default]
    Dashboard,
    /// Daily log entry form
    Data,
    /// Performance insights (display only)
    Reports,
    /// Notifications and alert switches
    Alerts,
}

impl Tab {
    /// All tabs in navigation order
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Data, Tab::Reports, Tab::Alerts];

    /// Label shown in the bottom navigation
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Data => "Data Entry",
            Tab::Reports => "Reports",
            Tab::Alerts => "Alerts",
        }
    }

    /// Position in navigation order
    pub fn index(&self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Data => 1,
            Tab::Reports => 2,
            Tab::Alerts => 3,
        }
    }

    /// Tab at a navigation position (wraps around)
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Dashboard => write!(f, "dashboard"),
            Tab::Data => write!(f, "data"),
            Tab::Reports => write!(f, "reports"),
            Tab::Alerts => write!(f, "alerts"),
        }
    }
}

impl FromStr for Tab {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" | "home" => Ok(Tab::Dashboard),
            "data" | "data-entry" | "entry" => Ok(Tab::Data),
            "reports" | "report" => Ok(Tab::Reports),
            "alerts" | "alert" => Ok(Tab::Alerts),
            _ => Err(FarmError::invalid_tab(s)),
        }
    }
}

/// Notification severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
    Info,
}

/// A notification shown on the alerts panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
    /// Relative display time ("2 min ago")
    pub time: String,
}

/// Today's farm figures. Fixed for the lifetime of the screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub total_birds: u32,
    pub mortality: u32,
    /// kg
    pub feed_consumption: u32,
    /// kg
    pub avg_weight: f64,
    /// °C
    pub temperature: f64,
    /// percent
    pub humidity: u32,
}

/// What kind of chore a log entry records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Feeding,
    Health,
    Cleaning,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::Feeding => write!(f, "feeding"),
            ActivityKind::Health => write!(f, "health"),
            ActivityKind::Cleaning => write!(f, "cleaning"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogStatus {
    Completed,
    Checked,
    InProgress,
}

impl std::fmt::Display for LogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogStatus::Completed => write!(f, "completed"),
            LogStatus::Checked => write!(f, "checked"),
            LogStatus::InProgress => write!(f, "in-progress"),
        }
    }
}

/// A row in the dashboard's recent activity list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: u32,
    pub kind: ActivityKind,
    pub shed: String,
    pub time: String,
    pub status: LogStatus,
}

impl ActivityLog {
    /// "Feeding - Shed A"
    pub fn title(&self) -> String {
        format!("{} - {}", crate::format::capitalize(&self.kind.to_string()), self.shed)
    }
}

/// Alert switches on the alerts panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    Temperature,
    Mortality,
    FeedLevel,
}

impl AlertKind {
    pub const ALL: [AlertKind; 3] = [
        AlertKind::Temperature,
        AlertKind::Mortality,
        AlertKind::FeedLevel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Temperature => "Temperature alerts",
            AlertKind::Mortality => "Mortality alerts",
            AlertKind::FeedLevel => "Feed level alerts",
        }
    }
}

/// Enabled flag per alert kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSettings {
    pub temperature: bool,
    pub mortality: bool,
    pub feed_level: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            temperature: true,
            mortality: true,
            feed_level: false,
        }
    }
}

impl AlertSettings {
    pub fn get(&self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::Temperature => self.temperature,
            AlertKind::Mortality => self.mortality,
            AlertKind::FeedLevel => self.feed_level,
        }
    }

    fn slot(&mut self, kind: AlertKind) -> &mut bool {
        match kind {
            AlertKind::Temperature => &mut self.temperature,
            AlertKind::Mortality => &mut self.mortality,
            AlertKind::FeedLevel => &mut self.feed_level,
        }
    }

    /// Flip one flag and return its new value
    pub fn toggle(&mut self, kind: AlertKind) -> bool {
        let slot = self.slot(kind);
        *slot = !*slot;
        *slot
    }
}

/// Buttons in the dashboard's quick actions grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    LogData,
    TakePhoto,
    ReportIssue,
    Biosecurity,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::LogData,
        QuickAction::TakePhoto,
        QuickAction::ReportIssue,
        QuickAction::Biosecurity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::LogData => "Log Data",
            QuickAction::TakePhoto => "Take Photo",
            QuickAction::ReportIssue => "Report Issue",
            QuickAction::Biosecurity => "Biosecurity",
        }
    }

    /// Tab the action navigates to. `None` for buttons that do nothing yet.
    pub fn target(&self) -> Option<Tab> {
        match self {
            QuickAction::LogData => Some(Tab::Data),
            QuickAction::ReportIssue => Some(Tab::Alerts),
            QuickAction::TakePhoto | QuickAction::Biosecurity => None,
        }
    }
}
