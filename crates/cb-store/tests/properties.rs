//! Property tests for store mutations.

use cb_store::{ContactFields, ContactStore};
use proptest::prelude::*;

fn arb_fields() -> impl Strategy<Value = ContactFields> {
    ("[a-zA-Z ]{0,8}", "[0-9-]{0,6}", "[a-z@.]{0,8}", "[a-zA-Z0-9 ]{0,10}")
        .prop_map(|(name, phone, email, address)| ContactFields::new(name, phone, email, address))
}

fn arb_valid_fields() -> impl Strategy<Value = ContactFields> {
    ("[a-zA-Z]{1,8}", "[0-9]{1,6}", "[a-z@.]{0,8}", "[a-zA-Z0-9 ]{0,10}")
        .prop_map(|(name, phone, email, address)| ContactFields::new(name, phone, email, address))
}

fn build_store(records: &[ContactFields]) -> ContactStore {
    let mut store = ContactStore::new();
    for fields in records {
        store.add(fields.clone()).expect("valid fields");
    }
    store
}

fn snapshot(store: &ContactStore) -> Vec<ContactFields> {
    store.iter().map(|c| c.fields().clone()).collect()
}

proptest! {
    #[test]
    fn add_grows_by_one_or_not_at_all(
        records in prop::collection::vec(arb_valid_fields(), 0..6),
        candidate in arb_fields(),
    ) {
        let mut store = build_store(&records);
        let before = store.len();
        let valid = candidate.missing_required().is_empty();

        let result = store.add(candidate.clone());

        if valid {
            prop_assert!(result.is_ok());
            prop_assert_eq!(store.len(), before + 1);
            prop_assert_eq!(store.get(before).map(|c| c.fields()), Some(&candidate));
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(store.len(), before);
        }
    }

    #[test]
    fn update_then_read_returns_new_fields(
        records in prop::collection::vec(arb_valid_fields(), 1..6),
        replacement in arb_fields(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = build_store(&records);
        let index = pick.index(store.len());
        let id = store.get(index).map(|c| c.id());

        store.update(index, replacement.clone()).expect("in bounds");

        prop_assert_eq!(store.get(index).map(|c| c.fields()), Some(&replacement));
        prop_assert_eq!(store.get(index).map(|c| c.id()), id);
        prop_assert_eq!(store.len(), records.len());
    }

    #[test]
    fn delete_shifts_later_records_down(
        records in prop::collection::vec(arb_valid_fields(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = build_store(&records);
        let before = snapshot(&store);
        let index = pick.index(store.len());

        store.delete(index).expect("in bounds");
        let after = snapshot(&store);

        prop_assert_eq!(after.len(), before.len() - 1);
        prop_assert_eq!(&after[..index], &before[..index]);
        prop_assert_eq!(&after[index..], &before[index + 1..]);
    }

    #[test]
    fn find_is_idempotent(
        records in prop::collection::vec(arb_valid_fields(), 0..6),
        query in "[a-zA-Z0-9]{1,3}",
    ) {
        let store = build_store(&records);
        let first = store.find(&query).map(|(i, c)| (i, c.id()));
        let second = store.find(&query).map(|(i, c)| (i, c.id()));
        prop_assert_eq!(first, second);
    }
}
