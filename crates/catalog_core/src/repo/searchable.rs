//! Search execution over entity stores.
//!
//! # Responsibility
//! - Compose filter, order and paginate into one `search` entry point.
//! - Keep ordering and pagination entity-generic; stores supply only the
//!   filter predicate and the sortable field set.
//!
//! # Invariants
//! - The pipeline order is fixed: filter, then order, then paginate.
//! - `count` reflects the filtered set, not the returned page.
//! - Ordering by an undeclared field is a no-op, not an error.
//! - Ordering uses a stable sort; equal keys keep their filtered order.

use crate::model::entity::Entity;
use crate::repo::memory::Repository;
use crate::search::params::{SearchParams, SortDirection};
use crate::search::result::SearchResult;
use serde_json::Value;

/// Store contract for filtered, ordered, paginated queries.
///
/// `search` is provided; implementations declare their sortable fields and
/// the entity-specific filter predicate.
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Field names eligible for ordering.
    fn sortable_fields(&self) -> &'static [&'static str];

    /// Entity-specific filter. Must return a subsequence of `items` in
    /// their given order; `None` filter text keeps every item.
    fn filter(&self, items: Vec<E>, filter_text: Option<&str>) -> Vec<E>;

    /// Runs filter, order and paginate over a snapshot of the store.
    fn search(&self, params: &SearchParams) -> SearchResult<E> {
        let filtered = self.filter(self.find_all(), params.filter());
        let count = filtered.len();
        let ordered = order_items(
            filtered,
            params.order_by_field(),
            params.order_by_direction(),
            self.sortable_fields(),
        );
        let page = paginate_items(ordered, params.page(), params.items_per_page());
        SearchResult::new(page, count, params.page(), params.items_per_page())
    }
}

/// Stable-sorts `items` by the named field's rendered value.
///
/// Returns the input unchanged when no field is given or the field is not
/// declared sortable.
pub fn order_items<E: Entity>(
    items: Vec<E>,
    field: Option<&str>,
    direction: Option<SortDirection>,
    sortable_fields: &[&str],
) -> Vec<E> {
    let field = match field {
        Some(value) => value,
        None => return items,
    };
    if !sortable_fields.contains(&field) {
        return items;
    }

    let mut keyed: Vec<(String, E)> = items
        .into_iter()
        .map(|entity| (sort_key(&entity, field), entity))
        .collect();
    // sort_by is stable: entities with equal keys keep their filtered order.
    match direction {
        Some(SortDirection::Desc) => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        _ => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
    }
    keyed.into_iter().map(|(_, entity)| entity).collect()
}

/// Slices one page out of `items`, clamping to the sequence bounds.
///
/// An out-of-range page yields an empty vector, never an error.
pub fn paginate_items<E>(items: Vec<E>, page: u32, items_per_page: u32) -> Vec<E> {
    let start = (page as usize)
        .saturating_sub(1)
        .saturating_mul(items_per_page as usize);
    items
        .into_iter()
        .skip(start)
        .take(items_per_page as usize)
        .collect()
}

/// Case-folded sort key for one field of one entity.
///
/// Strings sort by their text, other scalars by their JSON rendering,
/// null or missing values by the empty string.
fn sort_key<E: Entity>(entity: &E, field: &str) -> String {
    let map = entity.to_map();
    let rendered = match map.get(field) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    rendered.to_lowercase()
}
