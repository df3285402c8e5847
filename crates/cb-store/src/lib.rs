//! In-memory contact store for Contact Book.
//!
//! The store owns an ordered sequence of [`Contact`] records. The position of
//! a record in that sequence is its display order and the handle used by the
//! index-based operations; each record also carries a stable [`ContactId`]
//! that survives updates and is never reused.
//!
//! # Example
//!
//! ```
//! use cb_store::{ContactFields, ContactStore};
//!
//! let mut store = ContactStore::new();
//! store.add(ContactFields::new("Alice", "111", "", "")).unwrap();
//!
//! let (index, contact) = store.find("ali").unwrap();
//! assert_eq!(index, 0);
//! assert_eq!(contact.phone(), "111");
//! ```

pub mod contact;
pub mod error;
pub mod ids;
pub mod store;

pub use contact::{Contact, ContactFields, RequiredField};
pub use error::{Result, StoreError};
pub use ids::ContactId;
pub use store::ContactStore;
