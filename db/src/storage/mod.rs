use std::fmt::Debug;

pub mod mem;

/// A record addressable by a unique string key.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    fn key(&self) -> &str;
}

/// Read access to a set of entities.
///
/// `list` must return entities in the same order on every call.
pub trait EntityStore<E: Entity>: Send + Sync + Debug {
    fn get(&self, key: &str) -> Option<E>;

    fn list(&self) -> Vec<E>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }

    fn contains(&self, key: &str) -> bool { self.get(key).is_some() }
}
