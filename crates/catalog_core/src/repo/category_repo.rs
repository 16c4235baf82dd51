//! Category store wiring for search.
//!
//! # Responsibility
//! - Declare the category sortable fields and the category filter predicate
//!   over the generic in-memory store.
//!
//! # Invariants
//! - Filtering matches on name containment, case-insensitively.
//! - Only `name` and `created_at` are sortable.

use crate::model::category::Category;
use crate::repo::memory::InMemoryRepository;
use crate::repo::searchable::SearchableRepository;

/// Field names categories can be ordered by.
pub const CATEGORY_SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

/// In-memory category store.
pub type CategoryInMemoryRepository = InMemoryRepository<Category>;

impl SearchableRepository<Category> for InMemoryRepository<Category> {
    fn sortable_fields(&self) -> &'static [&'static str] {
        CATEGORY_SORTABLE_FIELDS
    }

    fn filter(&self, items: Vec<Category>, filter_text: Option<&str>) -> Vec<Category> {
        match filter_text {
            None => items,
            Some(text) => {
                let needle = text.to_lowercase();
                items
                    .into_iter()
                    .filter(|category| category.name().to_lowercase().contains(&needle))
                    .collect()
            }
        }
    }
}
