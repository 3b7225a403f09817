//! Search state carried in the page URL.

use common::filter_set::FilterSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InitialSearch {
    pub keyword: String,
    pub filters: FilterSet,
}

impl InitialSearch {
    pub fn from_keyword(keyword: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), filters: FilterSet::new() }
    }
}
