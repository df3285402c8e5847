//! Application state management
//!
//! Contains all runtime state types for the GUI application.

mod app_state;
mod form;
mod prompt;
mod row;
mod settings;

pub use app_state::AppState;
pub use form::{FormField, FormState};
pub use prompt::{Notice, NoticeKind, Prompt};
pub use row::ContactRow;
pub use settings::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, DisplaySettings, LogFormat, LoggingSettings,
    Settings,
};
