//! Per-entity storage port.
//!
//! The ledger services take a store per entity as an injected dependency,
//! so the ledger rules stay testable independent of the backing storage.
//! The in-memory implementation here is the only backend in scope; a
//! database adapter would implement the same trait.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use nexus_core::{DomainError, DomainResult};

/// Key/value store abstraction for one entity type.
///
/// `update` runs the mutation under the store's write lock, so concurrent
/// callers cannot interleave a read-modify-write on the same record (the
/// two-cashiers-last-unit case).
pub trait EntityStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn upsert(&self, key: K, value: V);
    /// Mutate an existing record in place. Returns `NotFound` if the key is
    /// absent; an `Err` from the closure leaves the record unchanged.
    fn update(&self, key: &K, f: &mut dyn FnMut(&mut V) -> DomainResult<()>) -> DomainResult<()>;
    fn list(&self) -> Vec<V>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> EntityStore<K, V> for Arc<S>
where
    S: EntityStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn upsert(&self, key: K, value: V) {
        (**self).upsert(key, value)
    }

    fn update(&self, key: &K, f: &mut dyn FnMut(&mut V) -> DomainResult<()>) -> DomainResult<()> {
        (**self).update(key, f)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory store backed by `RwLock<HashMap>`.
#[derive(Debug)]
pub struct InMemoryEntityStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryEntityStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryEntityStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> EntityStore<K, V> for InMemoryEntityStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn upsert(&self, key: K, value: V) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key, value);
        }
    }

    fn update(&self, key: &K, f: &mut dyn FnMut(&mut V) -> DomainResult<()>) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("store lock poisoned"))?;
        let value = map.get_mut(key).ok_or(DomainError::NotFound)?;

        // Apply to a copy so a rejected mutation leaves the record intact.
        let mut draft = value.clone();
        f(&mut draft)?;
        *value = draft;
        Ok(())
    }

    fn list(&self) -> Vec<V> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_get_list() {
        let store = InMemoryEntityStore::<u32, String>::new();
        assert!(store.is_empty());

        store.upsert(1, "one".to_string());
        store.upsert(2, "two".to_string());
        assert_eq!(store.get(&1), Some("one".to_string()));
        assert_eq!(store.len(), 2);

        store.upsert(1, "uno".to_string());
        assert_eq!(store.get(&1), Some("uno".to_string()));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_missing_key_is_not_found() {
        let store = InMemoryEntityStore::<u32, String>::new();
        let err = store.update(&7, &mut |_| Ok(())).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn failed_update_leaves_record_unchanged() {
        let store = InMemoryEntityStore::<u32, i64>::new();
        store.upsert(1, 10);

        let err = store
            .update(&1, &mut |v| {
                *v = 99;
                Err(DomainError::validation("nope"))
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.get(&1), Some(10));
    }

    #[test]
    fn updates_are_serialized_across_threads() {
        let store = Arc::new(InMemoryEntityStore::<u32, i64>::new());
        store.upsert(1, 0);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    store
                        .update(&1, &mut |v| {
                            *v += 1;
                            Ok(())
                        })
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get(&1), Some(800));
    }
}
