//! GUI-specific error types.
//!
//! [`ActionError`] covers every way a user action can fail. None of them are
//! fatal: each is turned into a [`Notice`] at the point of the action and the
//! application carries on.

use std::fmt;
use std::path::{Path, PathBuf};

use cb_store::{RequiredField, StoreError};
use thiserror::Error;

use crate::state::Notice;

/// The user action that needs a selected contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Update,
    Delete,
}

impl SelectionAction {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Errors raised by contact actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Add attempted with a required field empty.
    #[error("{}.", RequiredField::describe(.missing))]
    Validation { missing: Vec<RequiredField> },

    /// Update or delete attempted with nothing selected.
    #[error("Please select a contact to {action}.")]
    NoSelection { action: SelectionAction },

    /// Search query matched no contact.
    #[error("No matching contact found.")]
    NotFound { query: String },

    /// Store rejected an operation the GUI should have prevented.
    #[error("{0}")]
    Store(StoreError),
}

impl ActionError {
    /// Title shown on the notification.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Missing Info",
            Self::NoSelection { .. } => "No Selection",
            Self::NotFound { .. } => "Not Found",
            Self::Store(_) => "Error",
        }
    }

    /// Blocking notification describing this error.
    pub fn to_notice(&self) -> Notice {
        let title = self.title();
        let message = self.to_string();
        match self {
            Self::Validation { .. } | Self::NoSelection { .. } => Notice::warning(title, message),
            Self::NotFound { .. } => Notice::info(title, message),
            Self::Store(_) => Notice::error(title, message),
        }
    }
}

impl From<StoreError> for ActionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation { missing } => Self::Validation { missing },
            other => Self::Store(other),
        }
    }
}

/// Errors reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl SettingsError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeKind;

    #[test]
    fn validation_from_store_error() {
        let err: ActionError = StoreError::Validation {
            missing: vec![RequiredField::Name, RequiredField::Phone],
        }
        .into();
        assert_eq!(err.title(), "Missing Info");
        assert_eq!(err.to_string(), "Name and Phone are required.");
    }

    #[test]
    fn no_selection_names_the_action() {
        let err = ActionError::NoSelection {
            action: SelectionAction::Delete,
        };
        assert_eq!(err.to_string(), "Please select a contact to delete.");
        assert_eq!(err.to_notice().kind, NoticeKind::Warning);
    }

    #[test]
    fn not_found_is_informational() {
        let notice = ActionError::NotFound {
            query: "999".to_string(),
        }
        .to_notice();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.title, "Not Found");
    }

    #[test]
    fn index_errors_stay_store_errors() {
        let err: ActionError = StoreError::IndexOutOfBounds { index: 2, len: 1 }.into();
        assert!(matches!(err, ActionError::Store(_)));
        assert_eq!(err.to_notice().kind, NoticeKind::Error);
    }
}
