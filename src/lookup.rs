//! Linear scans over contacts in insertion order.
//!
//! Both functions are side-effect free and O(n); the address book is
//! expected to stay small.

use crate::contact::Contact;
use crate::error::{StoreError, StoreResult};
use uuid::Uuid;

/// Find the contact with `id` and its position.
pub fn find_by_id(contacts: &[Contact], id: Uuid) -> StoreResult<(&Contact, usize)> {
    contacts
        .iter()
        .enumerate()
        .find(|(_, contact)| contact.id == id)
        .map(|(pos, contact)| (contact, pos))
        .ok_or(StoreError::IdNotFound(id))
}

/// Find the first contact whose name contains `text`.
///
/// Matching is case-sensitive and unanchored, so an empty `text` matches the
/// first contact.
pub fn find_by_name<'a>(contacts: &'a [Contact], text: &str) -> StoreResult<&'a Contact> {
    contacts
        .iter()
        .find(|contact| contact.name.contains(text))
        .ok_or_else(|| StoreError::NameNotFound(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactDraft;

    fn sample() -> Vec<Contact> {
        ["Juju", "Tutu", "Juliana"]
            .into_iter()
            .map(|name| ContactDraft::new(name, "1", "x@y.z").into_contact(Uuid::new_v4()))
            .collect()
    }

    #[test]
    fn find_by_id_returns_position() {
        let contacts = sample();
        let (found, pos) = find_by_id(&contacts, contacts[1].id).unwrap();
        assert_eq!(pos, 1);
        assert_eq!(found.name, "Tutu");
    }

    #[test]
    fn find_by_id_missing() {
        let contacts = sample();
        let id = Uuid::new_v4();
        assert_eq!(find_by_id(&contacts, id), Err(StoreError::IdNotFound(id)));
    }

    #[test]
    fn find_by_name_first_match_wins() {
        let contacts = sample();
        assert_eq!(find_by_name(&contacts, "Ju").unwrap().name, "Juju");
        assert_eq!(find_by_name(&contacts, "lia").unwrap().name, "Juliana");
    }

    #[test]
    fn find_by_name_is_case_sensitive() {
        let contacts = sample();
        assert!(find_by_name(&contacts, "juju").unwrap_err().is_not_found());
    }

    #[test]
    fn empty_text_matches_first_contact() {
        let contacts = sample();
        assert_eq!(find_by_name(&contacts, "").unwrap().id, contacts[0].id);
        assert!(find_by_name(&[], "").is_err());
    }
}
