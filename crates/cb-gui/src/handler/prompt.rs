//! Prompt response handler.
//!
//! Handles:
//! - Search query entry, submission and cancellation
//! - Delete confirmation and cancellation
//! - Notice dismissal
//!
//! A response only acts on the prompt it answers; anything else is ignored
//! and the pending prompt is left in place.

use iced::Task;
use tracing::{debug, info, warn};

use super::MessageHandler;
use super::contact::report;
use crate::error::ActionError;
use crate::logging::redact_value;
use crate::message::{Message, PromptMessage};
use crate::state::{AppState, Prompt};

/// Handler for prompt responses.
pub struct PromptHandler;

impl MessageHandler<PromptMessage> for PromptHandler {
    fn handle(&self, state: &mut AppState, msg: PromptMessage) -> Task<Message> {
        match msg {
            PromptMessage::SearchQueryChanged(value) => {
                if let Some(Prompt::Search { query }) = &mut state.prompt {
                    *query = value;
                }
            }

            PromptMessage::SearchSubmitted => match state.prompt.take() {
                Some(Prompt::Search { query }) => {
                    let result = run_search(state, &query);
                    report(state, result);
                }
                other => ignore(state, other, "search submission"),
            },

            PromptMessage::SearchCancelled => match state.prompt.take() {
                Some(Prompt::Search { .. }) => debug!("Search cancelled"),
                other => ignore(state, other, "search cancellation"),
            },

            PromptMessage::DeleteConfirmed => match state.prompt.take() {
                Some(Prompt::ConfirmDelete { id, name }) => {
                    let Some(index) = state.store.position(id) else {
                        warn!(%id, "Contact vanished before delete was confirmed");
                        return Task::none();
                    };
                    let result = state.store.delete(index).map_err(ActionError::from);
                    match result {
                        Ok(_) => {
                            state.refresh();
                            state.form.clear();
                            state.selection = None;
                            info!(index, name = %redact_value(&name), "Contact deleted");
                        }
                        Err(e) => report(state, Err(e)),
                    }
                }
                other => ignore(state, other, "delete confirmation"),
            },

            PromptMessage::DeleteCancelled => match state.prompt.take() {
                Some(Prompt::ConfirmDelete { .. }) => debug!("Delete cancelled"),
                other => ignore(state, other, "delete cancellation"),
            },

            PromptMessage::NoticeDismissed => {
                state.notice = None;
            }
        }
        Task::none()
    }
}

/// Put back a prompt that the response did not answer.
fn ignore(state: &mut AppState, pending: Option<Prompt>, response: &str) {
    debug!(response, pending = ?pending.as_ref().map(Prompt::title), "Ignoring unmatched prompt response");
    state.prompt = pending;
}

/// Select the first contact matching `query`.
///
/// An empty query does nothing.
fn run_search(state: &mut AppState, query: &str) -> Result<(), ActionError> {
    if query.is_empty() {
        debug!("Empty search query");
        return Ok(());
    }

    let index = state
        .store
        .find(query)
        .map(|(index, _)| index)
        .ok_or_else(|| ActionError::NotFound {
            query: query.to_string(),
        })?;

    state.select_row(index);
    info!(index, query = %redact_value(query), "Search matched");
    Ok(())
}
