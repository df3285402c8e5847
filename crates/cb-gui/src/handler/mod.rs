//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type and
//! receives the full application state:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Contact(msg) => ContactHandler.handle(&mut self.state, msg),
//!         Message::Prompt(msg) => PromptHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```
//!
//! Handlers run synchronously to completion; none of them spawn work.

mod contact;
mod keyboard;
mod prompt;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use contact::ContactHandler;
pub use keyboard::KeyboardHandler;
pub use prompt::PromptHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
