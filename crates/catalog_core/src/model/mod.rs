//! Domain model layer: identity, entity contract, validation, categories.
//!
//! # Responsibility
//! - Define the value objects and entity records the catalog manages.
//! - Keep field validation pluggable behind the `FieldValidator` seam.
//!
//! # Invariants
//! - Every entity is identified by a stable `EntityId`.
//! - Entities are immutable; a field change produces a replacement value.

pub mod category;
pub mod entity;
pub mod entity_id;
pub mod validation;
