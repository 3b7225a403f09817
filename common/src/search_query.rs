//! Shared search query models and helpers.

use serde::{Deserialize, Serialize};

use crate::{filter_set::FilterSet, search_const::{DEFAULT_LOCALE, PAGE_SIZE}};


/// Request body of the Foodbook product search.
///
/// `page_index` is zero-based on the wire; the result page controller counts
/// pages from one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQuery {
    pub keyword: String,
    pub filters: FilterSet,
    pub page_index: u32,
    pub page_size: u32,
    pub locale: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            filters: FilterSet::new(),
            page_index: 0,
            page_size: PAGE_SIZE,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl SearchQuery {
    pub fn is_unconstrained(&self) -> bool {
        self.keyword.trim().is_empty() && self.filters.is_empty()
    }
}
