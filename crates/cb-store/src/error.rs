use thiserror::Error;

use crate::contact::RequiredField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required field was empty when adding a contact.
    #[error("{}", RequiredField::describe(.missing))]
    Validation { missing: Vec<RequiredField> },

    #[error("contact index {index} out of bounds (store holds {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;
