use crate::contact::{Contact, ContactDraft};
use crate::error::StoreResult;
use crate::lookup;
use uuid::Uuid;

/// Insertion-ordered collection of contacts.
///
/// Every identifier is generated by [`ContactStore::add`], so ids stay unique
/// for as long as the store lives.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the two demo contacts.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.add(ContactDraft::new("Juju", "48 99119-9999", "juju@gmail.com"));
        store.add(ContactDraft::new("Tutu", "48 99119-9999", "tutu@gmail.com"));
        store
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn find_by_id(&self, id: Uuid) -> StoreResult<(&Contact, usize)> {
        lookup::find_by_id(&self.contacts, id)
    }

    pub fn find_by_name(&self, text: &str) -> StoreResult<&Contact> {
        lookup::find_by_name(&self.contacts, text)
    }

    /// Append a contact under a freshly generated id and return that id.
    pub fn add(&mut self, draft: ContactDraft) -> Uuid {
        let id = Uuid::new_v4();
        self.contacts.push(draft.into_contact(id));
        tracing::debug!(%id, total = self.contacts.len(), "contact added");
        id
    }

    /// Remove the contact with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: Uuid) -> StoreResult<Contact> {
        let (_, pos) = self.find_by_id(id)?;
        let removed = self.contacts.remove(pos);
        tracing::debug!(%id, total = self.contacts.len(), "contact removed");
        Ok(removed)
    }

    /// Replace every field of the contact with `id` except the id itself.
    pub fn replace(&mut self, id: Uuid, draft: ContactDraft) -> StoreResult<&Contact> {
        let (_, pos) = self.find_by_id(id)?;
        self.contacts[pos] = draft.into_contact(id);
        tracing::debug!(%id, "contact replaced");
        Ok(&self.contacts[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    fn names(store: &ContactStore) -> Vec<&str> {
        store.contacts().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn seeded_store_has_demo_contacts() {
        let store = ContactStore::seeded();
        assert_eq!(names(&store), ["Juju", "Tutu"]);
        assert_ne!(store.contacts()[0].id, store.contacts()[1].id);
    }

    #[test]
    fn add_then_find_round_trips_fields() {
        let mut store = ContactStore::new();
        let id = store.add(ContactDraft::new("Ana", "111", "a@x.com"));
        let (found, pos) = store.find_by_id(id).unwrap();
        assert_eq!(pos, 0);
        assert_eq!(found, &ContactDraft::new("Ana", "111", "a@x.com").into_contact(id));
    }

    #[test]
    fn add_appends_in_order_and_accepts_empty_fields() {
        let mut store = ContactStore::seeded();
        store.add(ContactDraft::default());
        store.add(ContactDraft::new("Ana", "", ""));
        assert_eq!(names(&store), ["Juju", "Tutu", "", "Ana"]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut store = ContactStore::seeded();
        store.add(ContactDraft::new("Ana", "111", "a@x.com"));
        let tutu = store.find_by_name("Tutu").unwrap().id;

        let removed = store.remove(tutu).unwrap();
        assert_eq!(removed.name, "Tutu");
        assert_eq!(names(&store), ["Juju", "Ana"]);
        assert_eq!(store.find_by_id(tutu), Err(StoreError::IdNotFound(tutu)));
    }

    #[test]
    fn remove_missing_leaves_store_untouched() {
        let mut store = ContactStore::seeded();
        let before = store.contacts().to_vec();
        let missing = Uuid::new_v4();
        assert_eq!(store.remove(missing), Err(StoreError::IdNotFound(missing)));
        assert_eq!(store.contacts(), before.as_slice());
    }

    #[test]
    fn replace_keeps_id_and_position() {
        let mut store = ContactStore::seeded();
        let juju = store.contacts()[0].id;
        let updated = store
            .replace(juju, ContactDraft::new("Juju Silva", "222", ""))
            .unwrap()
            .clone();
        assert_eq!(updated.id, juju);
        assert_eq!(updated.number, "222");
        assert_eq!(updated.email, "");
        assert_eq!(store.contacts()[0], updated);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_missing_is_not_found() {
        let mut store = ContactStore::new();
        let missing = Uuid::new_v4();
        let err = store.replace(missing, ContactDraft::default()).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty());
    }
}
