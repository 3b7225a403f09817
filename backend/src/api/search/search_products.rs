//! Product search endpoint.

use common::{
    search_const::{PAGE_SIZE, normalize_locale},
    search_query::SearchQuery,
    search_result::SearchResult,
};

use crate::foodbook_utils::foodbook_client::FoodbookClient;

pub async fn search_products(query: SearchQuery) -> anyhow::Result<SearchResult> {
    let client = FoodbookClient::shared()?;
    search_products_with(client, query).await
}

pub async fn search_products_with(client: &FoodbookClient, mut query: SearchQuery) -> anyhow::Result<SearchResult> {
    query.keyword = query.keyword.trim().to_string();
    query.locale = normalize_locale(&query.locale).to_string();
    if query.page_size == 0 || query.page_size > PAGE_SIZE {
        query.page_size = PAGE_SIZE;
    }
    client.search(&query).await
}
