//! Core domain logic for the catalog engine.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryInput, CategoryValidator};
pub use model::entity::{entity_to_map, Entity};
pub use model::entity_id::{EntityId, InvalidEntityIdError};
pub use model::validation::{EntityValidationError, FieldErrors, FieldValidator};
pub use repo::category_repo::{CategoryInMemoryRepository, CATEGORY_SORTABLE_FIELDS};
pub use repo::memory::{InMemoryRepository, RepoError, RepoResult, Repository};
pub use repo::searchable::SearchableRepository;
pub use search::params::{SearchParams, SearchRequest, SortDirection};
pub use search::result::SearchResult;
pub use service::category_service::{
    CategoryOutput, CategoryPage, CategoryService, CategoryServiceError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
