//! Reusable UI components.
//!
//! - **Form field**: labelled text input with a required marker
//! - **Modal**: overlays for prompts and notices
//! - **Action button**: icon + label button

mod action_button;
mod form_field;
mod modal;

pub use action_button::action_button;
pub use form_field::form_field;
pub use modal::{alert_modal, confirm_modal, modal};
