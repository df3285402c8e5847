//! Prompt responses.

/// Responses to a pending [`Prompt`](crate::state::Prompt) or
/// [`Notice`](crate::state::Notice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptMessage {
    /// Search query text changed
    SearchQueryChanged(String),

    /// Search prompt submitted
    SearchSubmitted,

    /// Search prompt cancelled
    SearchCancelled,

    /// Delete confirmed
    DeleteConfirmed,

    /// Delete cancelled
    DeleteCancelled,

    /// Notice acknowledged
    NoticeDismissed,
}
