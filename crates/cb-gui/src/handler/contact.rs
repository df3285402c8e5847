//! Form and list message handler.
//!
//! Handles:
//! - Form input edits
//! - Add / Update / Delete / Search / Clear buttons
//! - Row selection

use iced::Task;
use iced::widget::{Id, operation};
use tracing::{debug, info, warn};

use super::MessageHandler;
use crate::error::{ActionError, SelectionAction};
use crate::logging::redact_value;
use crate::message::{ContactMessage, Message};
use crate::state::{AppState, Notice, Prompt};
use crate::view::SEARCH_INPUT_ID;

/// Handler for form and list messages.
pub struct ContactHandler;

impl MessageHandler<ContactMessage> for ContactHandler {
    fn handle(&self, state: &mut AppState, msg: ContactMessage) -> Task<Message> {
        if state.is_blocked() {
            debug!("Ignoring form input while a dialog is open");
            return Task::none();
        }

        match msg {
            ContactMessage::FieldChanged(field, value) => {
                state.form.set(field, value);
            }

            ContactMessage::AddClicked => {
                let result = add_contact(state);
                report(state, result);
            }

            ContactMessage::UpdateClicked => {
                let result = update_contact(state);
                report(state, result);
            }

            ContactMessage::DeleteClicked => {
                let result = request_delete(state);
                report(state, result);
            }

            ContactMessage::SearchClicked => {
                state.prompt = Some(Prompt::search());
                debug!("Search prompt opened");
                return operation::focus(Id::new(SEARCH_INPUT_ID));
            }

            ContactMessage::ClearClicked => {
                state.form.clear();
            }

            ContactMessage::RowSelected(index) => {
                if state.select_row(index).is_none() {
                    debug!(index, "Row selection out of range");
                }
            }
        }
        Task::none()
    }
}

// =============================================================================
// HANDLER FUNCTIONS
// =============================================================================

/// Turn a failed action into a blocking notice.
pub(super) fn report(state: &mut AppState, result: Result<(), ActionError>) {
    if let Err(e) = result {
        warn!("{}: {}", e.title(), e);
        state.notice = Some(e.to_notice());
    }
}

/// Validate the form and append it as a new contact.
fn add_contact(state: &mut AppState) -> Result<(), ActionError> {
    let fields = state.form.to_fields();
    let name = redact_value(&fields.name).to_string();
    let id = state.store.add(fields)?;

    state.refresh();
    state.form.clear();
    state.notice = Some(Notice::success("Success", "Contact added successfully."));
    info!(%id, name = %name, total = state.store.len(), "Contact added");
    Ok(())
}

/// Overwrite the selected contact with the form contents.
fn update_contact(state: &mut AppState) -> Result<(), ActionError> {
    let index = state.selected_index().ok_or(ActionError::NoSelection {
        action: SelectionAction::Update,
    })?;

    state.store.update(index, state.form.to_fields())?;

    state.refresh();
    state.form.clear();
    state.selection = None;
    state.notice = Some(Notice::success("Updated", "Contact updated successfully."));
    info!(index, "Contact updated");
    Ok(())
}

/// Ask for confirmation before deleting the selected contact.
///
/// The contact's id is captured now; the confirmation acts on that contact
/// even if rows shift in between.
fn request_delete(state: &mut AppState) -> Result<(), ActionError> {
    let no_selection = ActionError::NoSelection {
        action: SelectionAction::Delete,
    };
    let id = state.selection.ok_or_else(|| no_selection.clone())?;
    let contact = state.store.get_by_id(id).ok_or(no_selection)?;

    state.prompt = Some(Prompt::ConfirmDelete {
        id,
        name: contact.name().to_string(),
    });
    debug!(%id, "Delete confirmation requested");
    Ok(())
}
