//! Message module for Contact Book.
//!
//! All user interactions and events flow through these message types.

pub mod contact;
pub mod prompt;

use iced::keyboard;

use crate::theme::ThemeMode;

pub use contact::ContactMessage;
pub use prompt::PromptMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Form and list actions
    Contact(ContactMessage),

    /// Answers to prompts and notice dismissal
    Prompt(PromptMessage),

    /// Theme switched from the header toggle
    ThemeChanged(ThemeMode),

    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation
    Noop,
}
