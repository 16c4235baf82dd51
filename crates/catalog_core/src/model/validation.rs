//! Pluggable field validation seam.
//!
//! # Responsibility
//! - Define the validator contract entities call during construction and
//!   update.
//! - Carry structured per-field error messages to callers.
//!
//! # Invariants
//! - Validators inspect the entity's `to_map` rendering, never its private
//!   representation.
//! - A failed validation aborts the mutation; no partially-updated entity is
//!   ever observable.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Contract for entity field validators.
///
/// `validate` receives the `to_map` rendering and either returns the
/// validated field set or the full error map, with every failing field
/// reported rather than just the first.
pub trait FieldValidator {
    fn validate(&self, fields: &Map<String, Value>) -> Result<Map<String, Value>, FieldErrors>;
}

/// Error raised when a validator rejects an entity's field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityValidationError {
    errors: FieldErrors,
}

impl EntityValidationError {
    pub fn new(errors: FieldErrors) -> Self {
        Self { errors }
    }

    /// Returns the field name to messages mapping.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns all messages recorded for one field.
    pub fn field(&self, name: &str) -> &[String] {
        self.errors.get(name).map_or(&[], Vec::as_slice)
    }
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity validation failed:")?;
        for (field, messages) in &self.errors {
            write!(f, " {field}=[{}]", messages.join(", "))?;
        }
        Ok(())
    }
}

impl Error for EntityValidationError {}

impl From<FieldErrors> for EntityValidationError {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}
