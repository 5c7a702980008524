//! Keyword filters over feed items.
//!
//! A request carries any number of `(field, keyword)` pairs. An item is kept
//! only if it matches every one of them; with no filters every item is kept.

pub mod field;
pub mod parse;

pub use field::FilterField;
pub use parse::{parse_filters, URL_PARAM};

use crate::feed::FeedItem;

/// A single `(field, keyword)` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Field to look in.
    pub field: FilterField,
    /// Lowercased keyword.
    pub keyword: String,
}

impl Filter {
    /// Create a filter. The keyword is lowercased.
    pub fn new(field: FilterField, keyword: &str) -> Self {
        Self {
            field,
            keyword: keyword.to_lowercase(),
        }
    }

    /// Check whether the item contains the keyword in this filter's field.
    pub fn matches(&self, item: &FeedItem) -> bool {
        self.field.matches(item, &self.keyword)
    }
}

/// Check whether an item passes every filter.
pub fn passes_all(item: &FeedItem, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| filter.matches(item))
}
