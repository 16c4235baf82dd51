//! Entity identity value object.
//!
//! # Responsibility
//! - Wrap the UUID string form used as the repository key.
//! - Validate identity seeds once, at construction.
//!
//! # Invariants
//! - An `EntityId` always holds a string that parses as a UUID.
//! - The stored string form never changes after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;
use uuid::Uuid;

/// Error for identity seeds that do not parse as a UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntityIdError {
    value: String,
}

impl InvalidEntityIdError {
    /// Returns the rejected seed value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for InvalidEntityIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid entity id: `{}` is not a valid uuid", self.value)
    }
}

impl Error for InvalidEntityIdError {}

/// Stable identifier for every catalog entity.
///
/// Keeps the exact string form it was constructed from: a parsed seed is
/// stored verbatim, a generated id uses the canonical lowercase form.
/// Equality and hashing follow the string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Generates a fresh random (version 4) identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Validates and wraps a caller-provided seed.
    ///
    /// # Errors
    /// - Returns `InvalidEntityIdError` when `seed` does not parse as a UUID.
    pub fn parse(seed: impl Into<String>) -> Result<Self, InvalidEntityIdError> {
        let seed = seed.into();
        match Uuid::parse_str(&seed) {
            Ok(_) => Ok(Self(seed)),
            Err(_) => Err(InvalidEntityIdError { value: seed }),
        }
    }

    /// Returns the string form used as the repository key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for EntityId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EntityId {
    type Err = InvalidEntityIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EntityId {
    type Error = InvalidEntityIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}
