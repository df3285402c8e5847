use std::fmt;

use uuid::Uuid;

/// Stable identifier for a stored contact.
///
/// Generated when a contact is added and kept across updates, so a selection
/// held by id keeps pointing at the same record after earlier rows are
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = ContactId::new();
        let b = ContactId::default();
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_hyphenated_uuid() {
        let id = ContactId::new();
        let shown = id.to_string();
        assert_eq!(shown.len(), 36);
        assert_eq!(Uuid::parse_str(&shown).ok(), Some(id.0));
    }
}
