//! Server functions the search page calls; they run next to the Foodbook client.

use common::{search_query::SearchQuery, search_result::SearchResult, suggestions::Suggestions};
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn server_error(e: anyhow::Error) -> ServerFnError {
    ServerFnError::ServerError { message: e.to_string(), code: 500, details: None }
}

/// Suggestions for a committed search box value. Short keywords yield none.
#[server]
pub async fn fetch_autocomplete(keyword: String, locale: String) -> Result<Suggestions, ServerFnError> {
    backend::api::search::autocomplete(keyword, locale).await.map_err(server_error)
}

#[server]
pub async fn search_products(query: SearchQuery) -> Result<SearchResult, ServerFnError> {
    backend::api::search::search_products(query).await.map_err(server_error)
}
