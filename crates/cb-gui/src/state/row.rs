//! Rendered list rows.

use cb_store::{ContactId, ContactStore};

/// One row of the contact list: the summary columns plus the handles needed
/// to act on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    /// Position in the store at the time of the last refresh.
    pub index: usize,
    pub id: ContactId,
    pub name: String,
    pub phone: String,
}

impl ContactRow {
    /// Project the store into rows, in sequence order.
    pub fn project(store: &ContactStore) -> Vec<Self> {
        store
            .iter()
            .enumerate()
            .map(|(index, contact)| Self {
                index,
                id: contact.id(),
                name: contact.name().to_string(),
                phone: contact.phone().to_string(),
            })
            .collect()
    }
}
