//! Entity-generic CRUD contract and in-memory store.
//!
//! # Responsibility
//! - Provide keyed insert/find/update/delete over any `Entity`.
//! - Preserve insertion order for full listings.
//!
//! # Invariants
//! - `insert` upserts: re-inserting an identity replaces the stored value
//!   and keeps its original listing position.
//! - `update`/`delete`/`find_by_id` never mutate state on a missing
//!   identity.

use crate::model::entity::Entity;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage error for repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No entity stored under the given identity string.
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "entity not found: `{id}`"),
        }
    }
}

impl Error for RepoError {}

/// CRUD contract every entity store implements.
///
/// Lookup methods take the identity string; an `EntityId` coerces through
/// its `Deref` to `str`.
pub trait Repository<E: Entity> {
    /// Stores the entity under its identity string. Re-inserting an existing
    /// identity silently replaces the stored value (upsert).
    fn insert(&mut self, entity: E);
    /// Returns the entity stored under `id`.
    fn find_by_id(&self, id: &str) -> RepoResult<E>;
    /// Returns every stored entity in insertion order.
    fn find_all(&self) -> Vec<E>;
    /// Replaces an existing entity; its identity must already be stored.
    fn update(&mut self, entity: E) -> RepoResult<()>;
    /// Removes the entity stored under `id`.
    fn delete(&mut self, id: &str) -> RepoResult<()>;
}

/// Hash-map backed store preserving insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    items: HashMap<String, E>,
    insertion_order: Vec<String>,
}

impl<E> InMemoryRepository<E> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Returns the number of stored entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn insert(&mut self, entity: E) {
        let key = entity.id().to_string();
        // Replacing an existing key keeps its original insertion slot.
        if self.items.insert(key.clone(), entity).is_none() {
            self.insertion_order.push(key);
        }
    }

    fn find_by_id(&self, id: &str) -> RepoResult<E> {
        self.items
            .get(id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    fn find_all(&self) -> Vec<E> {
        self.insertion_order
            .iter()
            .filter_map(|key| self.items.get(key).cloned())
            .collect()
    }

    fn update(&mut self, entity: E) -> RepoResult<()> {
        let key = entity.id().to_string();
        if !self.items.contains_key(&key) {
            return Err(RepoError::NotFound(key));
        }
        self.items.insert(key, entity);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> RepoResult<()> {
        if self.items.remove(id).is_none() {
            return Err(RepoError::NotFound(id.to_string()));
        }
        self.insertion_order.retain(|key| key != id);
        Ok(())
    }
}
