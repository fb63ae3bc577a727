pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod model;
pub mod state;

pub use config::{FarmConfig, LoggingConfig, UiConfig};
pub use error::{FarmError, Result};
pub use form::{DailyLogEntry, DailyLogForm, FieldError, FieldKind, FormField};
pub use model::{
    ActivityKind, ActivityLog, AlertKind, AlertSettings, DailySnapshot, LogStatus, Notification,
    NotificationKind, QuickAction, Tab,
};
pub use state::{
    Acknowledgment, AlertsView, AppState, DashboardView, DataEntryView, Panel, ReportsView,
};
