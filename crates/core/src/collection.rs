//! Keyed entity collections.
//!
//! A fetched collection is the client's working copy of remote state.
//! Writes are applied here optimistically after the remote acknowledges
//! them, because the remote itself never durably persists writes.

/// An entity addressable by a stable key within a collection.
pub trait Keyed {
    /// The key type. `Ord` lets collections report their largest key so
    /// callers can mint fresh ones above it.
    type Key: Copy + Eq + Ord;

    /// This entity's key.
    fn key(&self) -> Self::Key;
}

/// An ordered collection of keyed entities with unique keys.
///
/// Preserves insertion order (the order the remote listed entities in,
/// followed by local appends). Lookups are linear; collections here are
/// catalog-page sized, not database sized.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityList<T: Keyed> {
    items: Vec<T>,
}

impl<T: Keyed> EntityList<T> {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a collection from already-fetched entities.
    ///
    /// If two entities share a key, the first occurrence wins and later
    /// ones are dropped, keeping the unique-key invariant even when the
    /// remote misbehaves.
    #[must_use]
    pub fn from_items(items: Vec<T>) -> Self {
        let mut list = Self::new();
        for item in items {
            list.push(item);
        }
        list
    }

    /// Number of entities in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The entities in order, as a slice.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the entities in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Look up an entity by key.
    #[must_use]
    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Whether an entity with this key is present.
    #[must_use]
    pub fn contains(&self, key: T::Key) -> bool {
        self.get(key).is_some()
    }

    /// The largest key currently present, if any.
    #[must_use]
    pub fn max_key(&self) -> Option<T::Key> {
        self.items.iter().map(Keyed::key).max()
    }

    /// Append an entity.
    ///
    /// Returns `false` and drops the entity if its key is already taken.
    pub fn push(&mut self, item: T) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Replace the entity under `key` with `f(current)`, in place.
    ///
    /// The replacement must carry the same key. Returns `false` without
    /// calling `f` if no entity has that key.
    pub fn update<F>(&mut self, key: T::Key, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        match self.items.iter_mut().find(|item| item.key() == key) {
            Some(slot) => {
                *slot = f(slot);
                true
            }
            None => false,
        }
    }

    /// Remove and return the entity under `key`.
    ///
    /// Absent keys are a no-op, matching delete semantics where removing
    /// something already gone is not an error.
    pub fn remove(&mut self, key: T::Key) -> Option<T> {
        let position = self.items.iter().position(|item| item.key() == key)?;
        Some(self.items.remove(position))
    }
}

impl<T: Keyed> Default for EntityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> FromIterator<T> for EntityList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<T: Keyed> IntoIterator for EntityList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a EntityList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Sticker {
        id: i64,
        label: &'static str,
    }

    impl Keyed for Sticker {
        type Key = i64;

        fn key(&self) -> i64 {
            self.id
        }
    }

    fn sticker(id: i64, label: &'static str) -> Sticker {
        Sticker { id, label }
    }

    #[test]
    fn test_from_items_keeps_first_on_duplicate_key() {
        let list = EntityList::from_items(vec![
            sticker(1, "first"),
            sticker(2, "second"),
            sticker(1, "imposter"),
        ]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().label, "first");
    }

    #[test]
    fn test_push_preserves_order_and_rejects_duplicates() {
        let mut list = EntityList::new();
        assert!(list.push(sticker(3, "c")));
        assert!(list.push(sticker(1, "a")));
        assert!(!list.push(sticker(3, "again")));
        let labels: Vec<_> = list.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["c", "a"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut list = EntityList::from_items(vec![sticker(1, "a"), sticker(2, "b")]);
        assert!(list.update(2, |old| Sticker {
            id: old.id,
            label: "b2",
        }));
        let labels: Vec<_> = list.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["a", "b2"]);
    }

    #[test]
    fn test_update_missing_key_is_false_and_untouched() {
        let mut list = EntityList::from_items(vec![sticker(1, "a")]);
        assert!(!list.update(9, |old| old.clone()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut list = EntityList::from_items(vec![sticker(1, "a")]);
        assert!(list.remove(999).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_returns_entity() {
        let mut list = EntityList::from_items(vec![sticker(1, "a"), sticker(2, "b")]);
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.label, "a");
        assert!(!list.contains(1));
    }

    #[test]
    fn test_max_key() {
        assert_eq!(EntityList::<Sticker>::new().max_key(), None);
        let list = EntityList::from_items(vec![sticker(5, "e"), sticker(2, "b")]);
        assert_eq!(list.max_key(), Some(5));
    }
}
