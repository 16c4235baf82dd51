//! Search result envelope with derived pagination metadata.
//!
//! # Responsibility
//! - Carry one page of query output together with its totals.
//! - Derive `current_page_count` and `last_page` so callers never do
//!   pagination math themselves.
//!
//! # Invariants
//! - `current_page_count` always equals `data.len()`.
//! - `last_page` is `ceil(count / items_per_page)` with a floor of 1.

use crate::model::entity::Entity;
use serde_json::{Map, Value};

/// One page of search output plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<E: Entity> {
    count: usize,
    items_per_page: u32,
    current_page: u32,
    current_page_count: usize,
    last_page: usize,
    data: Vec<E>,
}

impl<E: Entity> SearchResult<E> {
    /// Builds a result page, deriving the dependent metadata.
    ///
    /// `data` accepts `None` for an empty page.
    pub fn new(
        data: impl Into<Option<Vec<E>>>,
        count: usize,
        current_page: u32,
        items_per_page: u32,
    ) -> Self {
        let data = data.into().unwrap_or_default();
        Self {
            count,
            items_per_page,
            current_page,
            current_page_count: data.len(),
            last_page: last_page_for(count, items_per_page),
            data,
        }
    }

    /// Total number of items that matched the filter.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Number of items on this page.
    pub fn current_page_count(&self) -> usize {
        self.current_page_count
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    pub fn data(&self) -> &[E] {
        &self.data
    }

    /// Consumes the result, returning the page items.
    pub fn into_data(self) -> Vec<E> {
        self.data
    }

    /// Renders the envelope with `data` as entity maps.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("count".to_string(), Value::from(self.count));
        map.insert("items_per_page".to_string(), Value::from(self.items_per_page));
        map.insert("current_page".to_string(), Value::from(self.current_page));
        map.insert(
            "current_page_count".to_string(),
            Value::from(self.current_page_count),
        );
        map.insert("last_page".to_string(), Value::from(self.last_page));
        map.insert(
            "data".to_string(),
            Value::Array(
                self.data
                    .iter()
                    .map(|entity| Value::Object(entity.to_map()))
                    .collect(),
            ),
        );
        map
    }
}

fn last_page_for(count: usize, items_per_page: u32) -> usize {
    // items_per_page is >= 1 via SearchParams; guard direct constructions.
    let per_page = items_per_page.max(1) as usize;
    count.div_ceil(per_page).max(1)
}
