//! Category domain entity and its field validator.
//!
//! # Responsibility
//! - Define the catalog's reference entity: name, description, active flag,
//!   creation timestamp.
//! - Enforce field rules at construction and update through the
//!   `FieldValidator` seam.
//!
//! # Invariants
//! - The identity assigned at construction never changes; every other field
//!   change produces a new value.
//! - `new`/`with_id`/`update` never return an entity that failed validation.
//! - `activate`/`deactivate` only flip `is_active` and skip validation.

use crate::model::entity::{entity_to_map, Entity};
use crate::model::entity_id::EntityId;
use crate::model::validation::{EntityValidationError, FieldErrors, FieldValidator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const NAME_MAX_CHARS: usize = 255;

const MSG_REQUIRED: &str = "This field is required.";
const MSG_NOT_NULL: &str = "This field may not be null.";
const MSG_NOT_BLANK: &str = "This field may not be blank.";
const MSG_NOT_STRING: &str = "Not a valid string.";
const MSG_NOT_BOOL: &str = "Must be a valid boolean.";
const MSG_NOT_INT: &str = "A valid integer is required.";

/// Caller-supplied fields for category construction.
///
/// `None` selects the declared default: no description, active, created at
/// the construction instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    /// Unix epoch milliseconds.
    pub created_at: Option<i64>,
}

/// Catalog category entity.
///
/// Immutable record: mutating operations return a replacement value and the
/// identity survives every replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "id")]
    identity: EntityId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: i64,
}

impl Category {
    /// Creates a validated category with a generated identity.
    pub fn new(input: CategoryInput) -> Result<Self, EntityValidationError> {
        Self::with_id(EntityId::new(), input)
    }

    /// Creates a validated category with a caller-provided identity.
    ///
    /// Used by restore paths where identity already exists externally.
    pub fn with_id(
        identity: EntityId,
        input: CategoryInput,
    ) -> Result<Self, EntityValidationError> {
        let category = Self {
            identity,
            name: input.name,
            description: input.description,
            is_active: input.is_active.unwrap_or(true),
            created_at: input.created_at.unwrap_or_else(now_epoch_ms),
        };
        category.validated()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Creation instant in unix epoch milliseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Returns a copy with `name` replaced.
    ///
    /// Field setters skip validation; `update` is the validated path.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with `description` replaced.
    pub fn with_description(&self, description: Option<String>) -> Self {
        Self {
            description,
            ..self.clone()
        }
    }

    /// Returns a copy with `is_active` replaced.
    pub fn with_is_active(&self, is_active: bool) -> Self {
        Self {
            is_active,
            ..self.clone()
        }
    }

    /// Returns a copy with `created_at` replaced.
    pub fn with_created_at(&self, created_at: i64) -> Self {
        Self {
            created_at,
            ..self.clone()
        }
    }

    /// Replaces name and description, re-validating the result.
    pub fn update(
        &self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, EntityValidationError> {
        self.with_name(name).with_description(description).validated()
    }

    /// Returns a copy marked active.
    pub fn activate(&self) -> Self {
        self.with_is_active(true)
    }

    /// Returns a copy marked inactive.
    pub fn deactivate(&self) -> Self {
        self.with_is_active(false)
    }

    /// Returns the statically declared default for a field, if it has one.
    ///
    /// Tooling/test helper; business logic reads the typed fields directly.
    /// `name` has no default, `created_at` is generated per construction, so
    /// both report `None`.
    pub fn default_of(field: &str) -> Option<Value> {
        match field {
            "description" => Some(Value::Null),
            "is_active" => Some(Value::Bool(true)),
            _ => None,
        }
    }

    fn validated(self) -> Result<Self, EntityValidationError> {
        CategoryValidator.validate(&self.to_map())?;
        Ok(self)
    }
}

impl Entity for Category {
    fn entity_id(&self) -> &EntityId {
        &self.identity
    }

    fn to_map(&self) -> Map<String, Value> {
        entity_to_map(self)
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

/// Field validator for category records.
///
/// Inspects the `to_map` rendering and reports every failing field. Message
/// phrasing follows the conventional per-field form so callers can surface
/// the text directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryValidator;

impl FieldValidator for CategoryValidator {
    fn validate(&self, fields: &Map<String, Value>) -> Result<Map<String, Value>, FieldErrors> {
        let mut errors = FieldErrors::new();

        match fields.get("name") {
            None => push_error(&mut errors, "name", MSG_REQUIRED),
            Some(Value::Null) => push_error(&mut errors, "name", MSG_NOT_NULL),
            Some(Value::String(name)) => {
                if name.trim().is_empty() {
                    push_error(&mut errors, "name", MSG_NOT_BLANK);
                } else if name.chars().count() > NAME_MAX_CHARS {
                    push_error(
                        &mut errors,
                        "name",
                        &format!(
                            "Ensure this field has no more than {NAME_MAX_CHARS} characters."
                        ),
                    );
                }
            }
            Some(_) => push_error(&mut errors, "name", MSG_NOT_STRING),
        }

        match fields.get("description") {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => push_error(&mut errors, "description", MSG_NOT_STRING),
        }

        match fields.get("is_active") {
            None | Some(Value::Bool(_)) => {}
            Some(Value::Null) => push_error(&mut errors, "is_active", MSG_NOT_NULL),
            Some(_) => push_error(&mut errors, "is_active", MSG_NOT_BOOL),
        }

        match fields.get("created_at") {
            None => {}
            Some(Value::Number(number)) if number.is_i64() => {}
            Some(Value::Null) => push_error(&mut errors, "created_at", MSG_NOT_NULL),
            Some(_) => push_error(&mut errors, "created_at", MSG_NOT_INT),
        }

        if errors.is_empty() {
            Ok(fields.clone())
        } else {
            Err(errors)
        }
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
