//! Shared helpers for the logging tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use cb_gui::handler::{ContactHandler, MessageHandler, PromptHandler};
use cb_gui::message::{ContactMessage, PromptMessage};
use cb_gui::state::{AppState, FormField};
use tracing_subscriber::fmt::MakeWriter;

pub const NAME: &str = "Zelda";
pub const PHONE: &str = "+1 555 0199";
pub const EMAIL: &str = "z@q.io";
pub const ADDRESS: &str = "Elm Street 7";
pub const QUERY: &str = "zel";

/// In-memory log sink.
#[derive(Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().expect("log buffer lock");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

pub struct LogBufferGuard {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogBufferGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBufferGuard;

    fn make_writer(&'a self) -> Self::Writer {
        LogBufferGuard {
            bytes: Arc::clone(&self.bytes),
        }
    }
}

/// Add a contact, find it by name, then delete it, all through the handlers.
pub fn add_search_delete(state: &mut AppState) {
    for (field, value) in [
        (FormField::Name, NAME),
        (FormField::Phone, PHONE),
        (FormField::Email, EMAIL),
        (FormField::Address, ADDRESS),
    ] {
        let _ = ContactHandler.handle(
            state,
            ContactMessage::FieldChanged(field, value.to_string()),
        );
    }
    let _ = ContactHandler.handle(state, ContactMessage::AddClicked);
    let _ = PromptHandler.handle(state, PromptMessage::NoticeDismissed);

    let _ = ContactHandler.handle(state, ContactMessage::SearchClicked);
    let _ = PromptHandler.handle(state, PromptMessage::SearchQueryChanged(QUERY.to_string()));
    let _ = PromptHandler.handle(state, PromptMessage::SearchSubmitted);

    let _ = ContactHandler.handle(state, ContactMessage::DeleteClicked);
    let _ = PromptHandler.handle(state, PromptMessage::DeleteConfirmed);
}
