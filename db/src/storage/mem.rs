use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::storage::{Entity, EntityStore};

/// An immutable in-memory store, iterated in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore<E: Entity> {
    entries: Vec<E>,
    index: HashMap<String, usize>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a store keyed by each entity's own key.
    pub fn try_from_entities<I>(entities: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut store = Self::empty();
        for entity in entities {
            store.insert(entity)?;
        }
        debug!("memory store loaded with {} entities", store.entries.len());
        Ok(store)
    }

    /// Builds a store from explicit key/entity pairs, every key must equal its entity's key.
    #[cfg(test)]
    pub(crate) fn try_from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<String>,
    {
        let entities = pairs
            .into_iter()
            .map(|(key, entity)| {
                let key: String = key.into();
                if key == entity.key() {
                    Ok(entity)
                } else {
                    Err(Error::KeyMismatch {
                        key,
                        id: entity.key().to_string(),
                    })
                }
            })
            .collect::<Result<Vec<E>>>()?;
        Self::try_from_entities(entities)
    }

    fn insert(&mut self, entity: E) -> Result<()> {
        let key = entity.key().to_string();
        if self.index.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(entity);
        Ok(())
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self { Self::empty() }
}

impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    fn get(&self, key: &str) -> Option<E> { self.index.get(key).and_then(|&i| self.entries.get(i)).cloned() }

    fn list(&self) -> Vec<E> { self.entries.clone() }

    fn len(&self) -> usize { self.entries.len() }
}
