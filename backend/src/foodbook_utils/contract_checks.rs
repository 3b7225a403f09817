//! Checks applied to every Foodbook payload before it reaches the search page.

use std::collections::HashSet;

use common::{search_query::SearchQuery, search_result::SearchResult, suggestions::Suggestions};

fn check_unique_ids(list: &str, ids: impl Iterator<Item = u64>) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Invalid autocomplete response: duplicate id {id} in {list}");
        }
    }
    Ok(())
}

pub fn check_suggestions(suggestions: &Suggestions) -> anyhow::Result<()> {
    check_unique_ids("products", suggestions.products.iter().map(|s| s.id))?;
    check_unique_ids("brands", suggestions.brands.iter().map(|s| s.id))?;
    check_unique_ids("producers", suggestions.producers.iter().map(|s| s.id))?;
    check_unique_ids("wholesalers", suggestions.wholesalers.iter().map(|s| s.id))?;
    Ok(())
}

pub fn check_search_result(result: &SearchResult, query: &SearchQuery) -> anyhow::Result<()> {
    let on_page = result.products.len() as u64;
    if on_page > query.page_size as u64 {
        anyhow::bail!("Invalid search response: {on_page} products for page size {}", query.page_size);
    }
    if on_page > result.results {
        anyhow::bail!("Invalid search response: {on_page} products but only {} results", result.results);
    }
    let mut keys = HashSet::new();
    for filter in &result.filters {
        if !keys.insert(filter.key.as_str()) {
            anyhow::bail!("Invalid search response: duplicate facet {:?}", filter.key);
        }
    }
    for range in &result.nutritional_ranges {
        if !range.minimal.is_finite() || !range.maximum.is_finite() || range.minimal > range.maximum {
            anyhow::bail!(
                "Invalid search response: range {:?} from {} to {}",
                range.name,
                range.minimal,
                range.maximum
            );
        }
    }
    Ok(())
}
