use std::collections::HashMap;

use crate::actor_framework::{Entity, FrameworkError};

pub type StoreResult<R, T> = Result<R, FrameworkError<<T as Entity>::Error>>;

/// In-memory keyed collection of entities.
///
/// Listings come back in insertion order. There are no secondary indexes:
/// filtered listings are a linear scan over [`Entity::matches`].
pub struct RecordStore<T: Entity> {
    records: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> RecordStore<T> {
    pub fn new(next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static) -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds the entity under a fresh id and stores it.
    pub fn create(&mut self, payload: T::CreatePayload) -> StoreResult<T, T> {
        let mut id = (self.next_id_fn)();
        while self.records.contains_key(&id) {
            id = (self.next_id_fn)();
        }
        let item = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected)?;
        self.order.push(id.clone());
        self.records.insert(id, item.clone());
        Ok(item)
    }

    pub fn get(&self, id: &T::Id) -> StoreResult<T, T> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    pub fn list(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    pub fn list_matching(&self, query: &T::Query) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .filter(|item| item.matches(query))
            .cloned()
            .collect()
    }

    /// Applies the patch through [`Entity::on_update`]. A rejected patch
    /// leaves the stored entity as it was.
    pub fn update(&mut self, id: &T::Id, patch: T::Patch) -> StoreResult<T, T> {
        let item = self
            .records
            .get_mut(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let mut updated = item.clone();
        updated.on_update(patch).map_err(FrameworkError::Rejected)?;
        *item = updated.clone();
        Ok(updated)
    }

    pub fn delete(&mut self, id: &T::Id) -> StoreResult<(), T> {
        if self.records.remove(id).is_none() {
            return Err(FrameworkError::NotFound(id.to_string()));
        }
        self.order.retain(|existing| existing != id);
        Ok(())
    }
}
