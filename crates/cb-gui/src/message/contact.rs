//! Form and list messages.

use crate::state::FormField;

/// Messages from the editing form, the action buttons and the contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMessage {
    /// A form input changed
    FieldChanged(FormField, String),

    /// Add button pressed
    AddClicked,

    /// Update button pressed
    UpdateClicked,

    /// Delete button pressed
    DeleteClicked,

    /// Search button pressed
    SearchClicked,

    /// Clear button pressed
    ClearClicked,

    /// A list row was clicked (row index from the last refresh)
    RowSelected(usize),
}
