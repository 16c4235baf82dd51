//! Search request normalization.
//!
//! # Responsibility
//! - Turn raw, caller-shaped query input into normalized `SearchParams`.
//! - Own the defaulting rules for page, page size, ordering and filter.
//!
//! # Invariants
//! - A `SearchParams` value is normalized at construction and never
//!   re-validated afterwards.
//! - `page` and `items_per_page` are always >= 1.
//! - `order_by_direction` is present exactly when `order_by_field` is.

use std::fmt::{Display, Formatter};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Sort direction for an ordered search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the lowercase wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parses a direction case-insensitively; anything unrecognized falls
    /// back to ascending.
    pub fn parse_or_asc(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw query input as received from callers.
///
/// All fields are optional; absent values select the documented defaults
/// during normalization. Boundary layers that fail to coerce a numeric value
/// leave the field `None`, which normalizes to the same default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size.
    pub items_per_page: Option<i64>,
    /// Field name to order by.
    pub order_by_field: Option<String>,
    /// `asc`/`desc`, case-insensitive.
    pub order_by_direction: Option<String>,
    /// Entity-specific filter text.
    pub filter: Option<String>,
}

/// Normalized query request.
///
/// Construct through [`SearchParams::from_request`]; accessors expose the
/// normalized values read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    page: u32,
    items_per_page: u32,
    order_by_field: Option<String>,
    order_by_direction: Option<SortDirection>,
    filter: Option<String>,
}

impl SearchParams {
    /// Normalizes a raw request.
    pub fn from_request(request: SearchRequest) -> Self {
        let order_by_field = normalize_text(request.order_by_field);
        let order_by_direction = order_by_field.as_ref().map(|_| {
            request
                .order_by_direction
                .as_deref()
                .map_or(SortDirection::Asc, SortDirection::parse_or_asc)
        });

        Self {
            page: normalize_page(request.page),
            items_per_page: normalize_items_per_page(request.items_per_page),
            order_by_field,
            order_by_direction,
            filter: normalize_text(request.filter),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn order_by_field(&self) -> Option<&str> {
        self.order_by_field.as_deref()
    }

    pub fn order_by_direction(&self) -> Option<SortDirection> {
        self.order_by_direction
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::from_request(SearchRequest::default())
    }
}

fn normalize_page(page: Option<i64>) -> u32 {
    match page {
        Some(value) if value >= 1 => u32::try_from(value).unwrap_or(u32::MAX),
        _ => DEFAULT_PAGE,
    }
}

fn normalize_items_per_page(items_per_page: Option<i64>) -> u32 {
    match items_per_page {
        Some(value) if value >= 1 => u32::try_from(value).unwrap_or(u32::MAX),
        _ => DEFAULT_ITEMS_PER_PAGE,
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
