use tracing::{debug, info};

use crate::form::{DailyLogForm, FormField};
use crate::model::{
    ActivityKind, ActivityLog, AlertKind, AlertSettings, DailySnapshot, LogStatus, Notification,
    NotificationKind, Tab,
};

/// Confirmation shown after the daily log is submitted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: String,
    pub message: String,
}

impl Acknowledgment {
    pub fn log_saved() -> Self {
        Self {
            title: "Success".to_string(),
            message: "Daily log saved successfully!".to_string(),
        }
    }
}

/// State of the farm screen.
///
/// Owned by whoever drives the screen and mutated only through the methods
/// below. Every update is total: none of them can fail.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    active_tab: Tab,
    notifications: Vec<Notification>,
    daily_data: DailySnapshot,
    recent_logs: Vec<ActivityLog>,
    form: DailyLogForm,
    alert_settings: AlertSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create state holding today's seeded figures
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Dashboard,
            notifications: seed_notifications(),
            daily_data: seed_daily_data(),
            recent_logs: seed_recent_logs(),
            form: DailyLogForm::default(),
            alert_settings: AlertSettings::default(),
        }
    }

    /// Seeded state opened on a given tab
    pub fn with_tab(tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..Self::new()
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn daily_data(&self) -> &DailySnapshot {
        &self.daily_data
    }

    pub fn recent_logs(&self) -> &[ActivityLog] {
        &self.recent_logs
    }

    pub fn form(&self) -> &DailyLogForm {
        &self.form
    }

    pub fn alert_settings(&self) -> &AlertSettings {
        &self.alert_settings
    }

    /// Whether the header bell should show its badge
    pub fn has_unread(&self) -> bool {
        !self.notifications.is_empty()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            debug!(from = %self.active_tab, to = %tab, "tab selected");
        }
        self.active_tab = tab;
    }

    /// Store the text exactly as typed. No parsing happens here.
    pub fn update_form_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Acknowledge the daily log and go back to the dashboard.
    ///
    /// The form is neither checked, stored, sent anywhere, nor cleared.
    pub fn submit_log(&mut self) -> Acknowledgment {
        match self.form.parse() {
            Ok(entry) => {
                info!(shed = %entry.shed, "daily log submitted");
                debug!(?entry, "daily log entry");
            }
            Err(problems) => {
                info!(
                    shed = %self.form.selected_shed,
                    problems = problems.len(),
                    "daily log submitted with unchecked values"
                );
            }
        }
        self.select_tab(Tab::Dashboard);
        Acknowledgment::log_saved()
    }

    /// Flip one alert switch, returning the new value
    pub fn toggle_alert_setting(&mut self, kind: AlertKind) -> bool {
        let enabled = self.alert_settings.toggle(kind);
        debug!(?kind, enabled, "alert setting toggled");
        enabled
    }

    /// The one panel produced for the active tab
    pub fn panel(&self) -> Panel<'_> {
        match self.active_tab {
            Tab::Dashboard => Panel::Dashboard(self.dashboard()),
            Tab::Data => Panel::DataEntry(self.data_entry()),
            Tab::Reports => Panel::Reports(self.reports()),
            Tab::Alerts => Panel::Alerts(self.alerts()),
        }
    }

    pub fn dashboard(&self) -> DashboardView<'_> {
        DashboardView {
            daily: &self.daily_data,
            recent_logs: &self.recent_logs,
        }
    }

    pub fn data_entry(&self) -> DataEntryView<'_> {
        DataEntryView { form: &self.form }
    }

    pub fn reports(&self) -> ReportsView {
        ReportsView::current()
    }

    pub fn alerts(&self) -> AlertsView<'_> {
        AlertsView {
            notifications: &self.notifications,
            settings: &self.alert_settings,
        }
    }
}

/// Read-only rendering input for exactly one tab
#[derive(Debug, Clone, Copy)]
pub enum Panel<'a> {
    Dashboard(DashboardView<'a>),
    DataEntry(DataEntryView<'a>),
    Reports(ReportsView),
    Alerts(AlertsView<'a>),
}

impl Panel<'_> {
    pub fn tab(&self) -> Tab {
        match self {
            Panel::Dashboard(_) => Tab::Dashboard,
            Panel::DataEntry(_) => Tab::Data,
            Panel::Reports(_) => Tab::Reports,
            Panel::Alerts(_) => Tab::Alerts,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    pub daily: &'a DailySnapshot,
    pub recent_logs: &'a [ActivityLog],
}

impl DashboardView<'_> {
    pub const BIRDS_TREND: &'static str = "+2.3% from yesterday";
    pub const HEALTH_RATE: &'static str = "99.8%";
    pub const HEALTH_NOTE: &'static str = "Excellent condition";

    /// "5,847"
    pub fn total_birds(&self) -> String {
        crate::format::thousands(u64::from(self.daily.total_birds))
    }

    /// "24.5°C"
    pub fn temperature(&self) -> String {
        format!("{}°C", crate::format::decimal(self.daily.temperature))
    }

    /// "68%"
    pub fn humidity(&self) -> String {
        format!("{}%", self.daily.humidity)
    }

    /// "1.8kg"
    pub fn avg_weight(&self) -> String {
        format!("{}kg", crate::format::decimal(self.daily.avg_weight))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DataEntryView<'a> {
    pub form: &'a DailyLogForm,
}

impl DataEntryView<'_> {
    pub const TITLE: &'static str = "Daily Data Entry";
    pub const SUBTITLE: &'static str = "Record today's farm observations";
    pub const SUBMIT_LABEL: &'static str = "Save Daily Log";
}

/// Display-only figures on the reports tab. Not derived from other state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportsView {
    pub weekly_growth: &'static str,
    pub growth_note: &'static str,
    pub feed_conversion_ratio: f64,
    pub fcr_note: &'static str,
    pub chart_placeholder: &'static str,
    pub links: [&'static str; 2],
}

impl ReportsView {
    pub const TITLE: &'static str = "Reports & Analytics";
    pub const SUBTITLE: &'static str = "View performance insights";

    fn current() -> Self {
        Self {
            weekly_growth: "+12.5%",
            growth_note: "Above target",
            feed_conversion_ratio: 1.85,
            fcr_note: "FCR ratio",
            chart_placeholder: "Chart visualization would appear here",
            links: ["Export Weekly Report", "Monthly Analytics"],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlertsView<'a> {
    pub notifications: &'a [Notification],
    pub settings: &'a AlertSettings,
}

impl AlertsView<'_> {
    pub const TITLE: &'static str = "Alerts & Notifications";
    pub const SUBTITLE: &'static str = "Stay informed about critical events";
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Warning,
            message: "Temperature above normal in Shed A".to_string(),
            time: "2 min ago".to_string(),
        },
        Notification {
            id: 2,
            kind: NotificationKind::Info,
            message: "Daily feeding completed".to_string(),
            time: "1 hour ago".to_string(),
        },
    ]
}

fn seed_daily_data() -> DailySnapshot {
    DailySnapshot {
        total_birds: 5847,
        mortality: 12,
        feed_consumption: 2340,
        avg_weight: 1.8,
        temperature: 24.5,
        humidity: 68,
    }
}

fn seed_recent_logs() -> Vec<ActivityLog> {
    let log = |id, kind, shed: &str, time: &str, status| ActivityLog {
        id,
        kind,
        shed: shed.to_string(),
        time: time.to_string(),
        status,
    };
    vec![
        log(1, ActivityKind::Feeding, "Shed A", "08:30 AM", LogStatus::Completed),
        log(2, ActivityKind::Health, "Shed B", "09:15 AM", LogStatus::Checked),
        log(3, ActivityKind::Cleaning, "Shed C", "10:00 AM", LogStatus::InProgress),
    ]
}
