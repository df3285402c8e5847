//! Application-level state

use cb_store::{ContactId, ContactStore};
use tracing::debug;

use super::{ContactRow, FormState, Notice, Prompt, Settings};

/// Top-level application state.
///
/// The store is owned here and handed to the handlers by `&mut`; the rows are
/// the list view's projection of it, rebuilt by [`refresh`](Self::refresh).
#[derive(Debug, Default)]
pub struct AppState {
    /// All contacts, in display order.
    pub store: ContactStore,
    /// Text in the editing form.
    pub form: FormState,
    /// Contact currently loaded into the form from the list, if any.
    pub selection: Option<ContactId>,
    /// Rendered list rows.
    pub rows: Vec<ContactRow>,
    /// Question awaiting an answer.
    pub prompt: Option<Prompt>,
    /// Notification awaiting dismissal.
    pub notice: Option<Notice>,
    /// User preferences.
    pub settings: Settings,
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Rebuild the list rows from the store.
    ///
    /// Row indices are recomputed every time. A selection whose contact is
    /// gone is dropped.
    pub fn refresh(&mut self) {
        self.rows = ContactRow::project(&self.store);
        if let Some(id) = self.selection
            && self.store.position(id).is_none()
        {
            debug!(%id, "dropping stale selection");
            self.selection = None;
        }
    }

    /// Select the row at `index` and load its contact into the form.
    ///
    /// Returns the selected id, or `None` when the index is stale.
    pub fn select_row(&mut self, index: usize) -> Option<ContactId> {
        let contact = self.store.get(index)?;
        let id = contact.id();
        self.form.load(contact.fields());
        self.selection = Some(id);
        Some(id)
    }

    /// Current store index of the selected contact.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.and_then(|id| self.store.position(id))
    }

    pub fn is_selected(&self, id: ContactId) -> bool {
        self.selection == Some(id)
    }

    /// True while a prompt or notice blocks the main window.
    pub fn is_blocked(&self) -> bool {
        self.prompt.is_some() || self.notice.is_some()
    }
}
