//! Autocomplete suggestions for the search box.

use common::{search_const::{MIN_QUERY_CHARS, normalize_locale}, suggestions::Suggestions};

use crate::foodbook_utils::foodbook_client::FoodbookClient;

pub async fn autocomplete(keyword: String, locale: String) -> anyhow::Result<Suggestions> {
    let client = FoodbookClient::shared()?;
    autocomplete_with(client, &keyword, &locale).await
}

pub async fn autocomplete_with(client: &FoodbookClient, keyword: &str, locale: &str) -> anyhow::Result<Suggestions> {
    let keyword = keyword.trim();
    // the page already guards this; callers of the server function may not
    if keyword.chars().count() < MIN_QUERY_CHARS {
        return Ok(Suggestions::default());
    }
    client.fetch_autocomplete(keyword, normalize_locale(locale)).await
}
