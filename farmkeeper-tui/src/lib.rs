pub mod app;
pub mod mode;
pub mod terminal;
pub mod tracing_setup;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use mode::AppMode;
pub use terminal::run;
