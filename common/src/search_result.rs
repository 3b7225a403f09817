use serde::{Deserialize, Serialize};


/// One page of Foodbook search results. Replaced as a whole on every search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResult {
    /// Total number of matching products over all pages.
    pub results: u64,
    pub products: Vec<SearchProduct>,
    pub filters: Vec<FilterResult>,
    pub show_sub_filters: Vec<String>,
    #[serde(rename = "voedingswaardes")]
    pub nutritional_ranges: Vec<NutritionalRange>,
}

impl SearchResult {
    /// Facets to render: top level facets, plus sub facets the API asked us to show.
    pub fn visible_filters(&self) -> impl Iterator<Item = &FilterResult> {
        self.filters.iter().filter(|f| match &f.parent_key {
            None => true,
            Some(_) => self.show_sub_filters.iter().any(|k| k == &f.key),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProduct {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub article_number: Option<String>,
    #[serde(default)]
    pub has_spec_sheet: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parent_key: Option<String>,
    #[serde(default)]
    pub items: Vec<FilterResultItem>,
}

impl FilterResult {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResultItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalRange {
    pub id: u64,
    pub name: String,
    pub minimal: f64,
    pub maximum: f64,
}
