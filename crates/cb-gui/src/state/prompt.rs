//! Pending prompts and notifications.
//!
//! A [`Prompt`] is a question put to the user; it stays pending until a
//! response message answers or cancels it. A [`Notice`] is a blocking
//! notification that stays up until it is dismissed.

use cb_store::ContactId;

/// A question awaiting the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Asking for a name or phone to search for.
    Search { query: String },
    /// Asking whether to delete the contact captured when Delete was pressed.
    ConfirmDelete { id: ContactId, name: String },
}

impl Prompt {
    pub fn search() -> Self {
        Self::Search {
            query: String::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Search { .. } => "Search",
            Self::ConfirmDelete { .. } => "Confirm Delete",
        }
    }
}

/// Severity of a notice; picks the icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, message)
    }
}
