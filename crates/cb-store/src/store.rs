//! The ordered contact store.

use tracing::debug;

use crate::contact::{Contact, ContactFields};
use crate::error::{Result, StoreError};
use crate::ids::ContactId;

/// Ordered in-memory sequence of contacts.
///
/// Indices are positions in the sequence and shift down when an earlier
/// record is deleted.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new contact.
    ///
    /// Fails with [`StoreError::Validation`] when name or phone is empty; the
    /// store is left untouched in that case.
    pub fn add(&mut self, fields: ContactFields) -> Result<ContactId> {
        let missing = fields.missing_required();
        if !missing.is_empty() {
            return Err(StoreError::Validation { missing });
        }

        let contact = Contact::new(fields);
        let id = contact.id();
        self.contacts.push(contact);
        debug!(%id, len = self.contacts.len(), "contact added");
        Ok(id)
    }

    /// Replaces all fields of the contact at `index`.
    ///
    /// Unlike [`add`](Self::add) this does not check required fields.
    pub fn update(&mut self, index: usize, fields: ContactFields) -> Result<()> {
        let len = self.contacts.len();
        let contact = self
            .contacts
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfBounds { index, len })?;
        contact.replace_fields(fields);
        debug!(index, id = %contact.id(), "contact updated");
        Ok(())
    }

    /// Removes and returns the contact at `index`.
    pub fn delete(&mut self, index: usize) -> Result<Contact> {
        let len = self.contacts.len();
        if index >= len {
            return Err(StoreError::IndexOutOfBounds { index, len });
        }
        let removed = self.contacts.remove(index);
        debug!(index, id = %removed.id(), len = self.contacts.len(), "contact deleted");
        Ok(removed)
    }

    /// First contact in sequence order matching `query`.
    ///
    /// See [`Contact::matches`] for the matching rule.
    pub fn find(&self, query: &str) -> Option<(usize, &Contact)> {
        self.contacts
            .iter()
            .enumerate()
            .find(|(_, contact)| contact.matches(query))
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn get_by_id(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id() == id)
    }

    /// Current index of the contact with `id`.
    pub fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.id() == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::RequiredField;

    fn fields(name: &str, phone: &str) -> ContactFields {
        ContactFields::new(name, phone, "", "")
    }

    #[test]
    fn add_rejects_missing_name() {
        let mut store = ContactStore::new();
        let err = store.add(fields("", "222")).unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation {
                missing: vec![RequiredField::Name]
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn add_appends_and_returns_id() {
        let mut store = ContactStore::new();
        let first = store.add(fields("Alice", "111")).unwrap();
        let second = store.add(fields("Bob", "222")).unwrap();
        assert_ne!(first, second);
        assert_eq!(store.position(first), Some(0));
        assert_eq!(store.position(second), Some(1));
    }

    #[test]
    fn update_out_of_bounds() {
        let mut store = ContactStore::new();
        store.add(fields("Alice", "111")).unwrap();
        let err = store.update(1, fields("Bob", "222")).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfBounds { index: 1, len: 1 });
        assert_eq!(store.get(0).unwrap().name(), "Alice");
    }

    #[test]
    fn update_allows_empty_required_fields() {
        let mut store = ContactStore::new();
        store.add(fields("Alice", "111")).unwrap();
        store.update(0, ContactFields::default()).unwrap();
        assert!(store.get(0).unwrap().fields().is_empty());
    }

    #[test]
    fn delete_out_of_bounds_on_empty_store() {
        let mut store = ContactStore::new();
        let err = store.delete(0).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfBounds { index: 0, len: 0 });
    }

    #[test]
    fn find_prefers_first_in_sequence() {
        let mut store = ContactStore::new();
        store.add(fields("Ann", "100")).unwrap();
        store.add(fields("Anna", "200")).unwrap();
        let (index, contact) = store.find("ann").unwrap();
        assert_eq!(index, 0);
        assert_eq!(contact.name(), "Ann");
    }

    #[test]
    fn get_by_id_follows_shifted_record() {
        let mut store = ContactStore::new();
        store.add(fields("Alice", "111")).unwrap();
        let bob = store.add(fields("Bob", "222")).unwrap();
        store.delete(0).unwrap();
        assert_eq!(store.position(bob), Some(0));
        assert_eq!(store.get_by_id(bob).unwrap().phone(), "222");
    }
}
