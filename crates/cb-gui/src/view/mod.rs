//! View module for Contact Book.
//!
//! Views are pure functions that render UI based on application state.
//!
//! ## Module Structure
//!
//! - `main_window.rs` - Header, editing form, action buttons, contact list
//! - `dialog.rs` - Prompt and notice overlays

pub mod dialog;
pub mod main_window;

use iced::Element;

use crate::message::Message;
use crate::state::AppState;

pub use dialog::{SEARCH_INPUT_ID, view_overlay};
pub use main_window::view_main_window;

/// Render the whole window: the main layout with any pending dialog on top.
pub fn view_main(state: &AppState) -> Element<'_, Message> {
    view_overlay(state, view_main_window(state))
}
