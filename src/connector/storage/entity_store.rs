use std::collections::BTreeMap;

use crate::domain::{DomainError, Entity, EntityId};

use super::IdAllocator;

/// Keyed collection of one entity type.
///
/// Not synchronized on its own; `InMemoryDatabase` puts every table behind a
/// single lock.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    entities: BTreeMap<EntityId, T>,
    ids: IdAllocator,
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            ids: IdAllocator::new(),
        }
    }

    pub fn insert(&mut self, mut entity: T) -> T {
        let id = self
            .ids
            .next_id(self.entities.keys().next_back().copied());
        entity.assign_id(id);
        self.entities.insert(id, entity.clone());
        entity
    }

    pub fn replace(&mut self, entity: T) -> Result<T, DomainError> {
        let id = entity.id().ok_or_else(|| {
            DomainError::invalid_reference(format!("{} id is not specified", T::KIND))
        })?;
        let slot = self.get_mut(id)?;
        *slot = entity.clone();
        Ok(entity)
    }

    pub fn get(&self, id: EntityId) -> Result<&T, DomainError> {
        self.entities
            .get(&id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))
    }

    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut T, DomainError> {
        self.entities
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))
    }

    pub fn delete(&mut self, id: EntityId) -> Result<T, DomainError> {
        self.entities
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))
    }

    pub fn list_all(&self) -> Vec<T> {
        self.entities.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entities.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entities.values_mut()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Fails with `NotFound` unless `id` is stored.
    pub fn ensure_exists(&self, id: EntityId) -> Result<(), DomainError> {
        self.get(id).map(|_| ())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::User;

    fn user(login: &str) -> User {
        User::new(
            format!("{}@ya.ru", login),
            login,
            "",
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        )
    }

    fn id(raw: i64) -> EntityId {
        EntityId::new(raw).unwrap()
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = EntityStore::new();

        let first = store.insert(user("first"));
        let second = store.insert(user("second"));

        assert_eq!(first.id(), Some(id(1)));
        assert_eq!(second.id(), Some(id(2)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_requires_id() {
        let mut store = EntityStore::new();

        let err = store.replace(user("anon")).unwrap_err();

        assert!(err.is_invalid_reference());
    }

    #[test]
    fn test_replace_unknown_id_is_not_found() {
        let mut store = EntityStore::new();
        store.insert(user("one"));
        store.insert(user("two"));

        let err = store.replace(user("ghost").with_id(id(3))).unwrap_err();

        assert_eq!(err, DomainError::not_found(User::KIND, id(3)));
    }

    #[test]
    fn test_replace_overwrites_in_place() {
        let mut store = EntityStore::new();
        store.insert(user("before"));

        store.replace(user("after").with_id(id(1))).unwrap();

        assert_eq!(store.get(id(1)).unwrap().login(), "after");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_and_delete_missing() {
        let mut store: EntityStore<User> = EntityStore::new();

        assert!(store.get(id(1)).unwrap_err().is_not_found());
        assert!(store.delete(id(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_returns_removed_entity_and_keeps_id_retired() {
        let mut store = EntityStore::new();
        store.insert(user("one"));
        store.insert(user("two"));

        let removed = store.delete(id(2)).unwrap();
        let next = store.insert(user("three"));

        assert_eq!(removed.login(), "two");
        assert!(!store.contains(id(2)));
        assert_eq!(next.id(), Some(id(3)));
    }

    #[test]
    fn test_list_all_returns_every_entity() {
        let mut store = EntityStore::new();
        store.insert(user("a"));
        store.insert(user("b"));

        let logins: Vec<_> = store
            .list_all()
            .iter()
            .map(|u| u.login().to_string())
            .collect();

        assert_eq!(logins, vec!["a", "b"]);
    }
}
