//! Main application module for Contact Book.
//!
//! Implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! All state changes happen in [`App::update`]; views are pure functions of
//! [`AppState`].

use iced::keyboard;
use iced::{Element, Subscription, Task, Theme};
use tracing::{error, info};

use crate::handler::{ContactHandler, KeyboardHandler, MessageHandler, PromptHandler};
use crate::message::Message;
use crate::state::{AppState, Notice, Settings};
use crate::theme::ThemeMode;
use crate::view::view_main;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// Root of the Iced application. Holds the application state and implements
/// the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance with an empty contact list.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let mut state = AppState::with_settings(settings);
        state.refresh();
        (Self { state }, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Contact(msg) => ContactHandler.handle(&mut self.state, msg),

            Message::Prompt(msg) => PromptHandler.handle(&mut self.state, msg),

            Message::ThemeChanged(mode) => {
                self.set_theme(mode);
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => {
                KeyboardHandler.handle(&mut self.state, (key, modifiers))
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_main(&self.state)
    }

    pub fn title(&self) -> String {
        "Contact Book".to_string()
    }

    pub fn theme(&self) -> Theme {
        self.state.settings.display.theme.theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }

    /// Switch theme and persist the choice.
    fn set_theme(&mut self, mode: ThemeMode) {
        if self.state.settings.display.theme == mode {
            return;
        }
        self.state.settings.display.theme = mode;
        info!(theme = mode.label(), "Theme changed");

        if let Err(e) = self.state.settings.save() {
            error!("Failed to save settings: {}", e);
            self.state.notice = Some(Notice::error(
                "Settings",
                format!("Could not save settings: {e}"),
            ));
        }
    }
}
