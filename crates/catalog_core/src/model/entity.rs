//! Entity base contract.
//!
//! # Responsibility
//! - Define the minimal surface the storage and search layers need from a
//!   domain record: a stable identity and a field-map rendering.
//!
//! # Invariants
//! - `to_map` renders every declared field plus the identity string under
//!   key `id`; the identity value itself is never embedded.

use crate::model::entity_id::EntityId;
use serde::Serialize;
use serde_json::{Map, Value};

/// Contract every stored record implements.
///
/// Implementations are plain immutable values: changing a field yields a new
/// record, so `Clone` is part of the contract.
pub trait Entity: Clone {
    /// Returns the identity assigned at creation.
    fn entity_id(&self) -> &EntityId;

    /// Returns the identity's string form, the repository key.
    fn id(&self) -> &str {
        self.entity_id().as_str()
    }

    /// Renders all declared fields plus `id` into a plain map.
    ///
    /// The rendering feeds validators, sort-key extraction and external
    /// serialization, so it must cover every field a caller can observe.
    fn to_map(&self) -> Map<String, Value>;
}

/// Renders a serializable record into the `to_map` object shape.
///
/// Plain data models serialize infallibly into JSON objects; any other shape
/// yields an empty map.
pub fn entity_to_map<T: Serialize>(record: &T) -> Map<String, Value> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
