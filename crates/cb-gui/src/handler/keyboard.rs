//! Keyboard shortcut handler.
//!
//! - Escape: dismiss the notice, or cancel the open prompt

use iced::Task;
use iced::keyboard::{self, key::Named};

use super::{MessageHandler, PromptHandler};
use crate::message::{Message, PromptMessage};
use crate::state::{AppState, Prompt};

/// Handler for key presses.
pub struct KeyboardHandler;

impl MessageHandler<(keyboard::Key, keyboard::Modifiers)> for KeyboardHandler {
    fn handle(
        &self,
        state: &mut AppState,
        (key, _modifiers): (keyboard::Key, keyboard::Modifiers),
    ) -> Task<Message> {
        let response = match key {
            keyboard::Key::Named(Named::Escape) => escape_response(state),
            _ => None,
        };

        match response {
            Some(msg) => PromptHandler.handle(state, msg),
            None => Task::none(),
        }
    }
}

fn escape_response(state: &AppState) -> Option<PromptMessage> {
    if state.notice.is_some() {
        return Some(PromptMessage::NoticeDismissed);
    }
    match state.prompt {
        Some(Prompt::Search { .. }) => Some(PromptMessage::SearchCancelled),
        Some(Prompt::ConfirmDelete { .. }) => Some(PromptMessage::DeleteCancelled),
        None => None,
    }
}
