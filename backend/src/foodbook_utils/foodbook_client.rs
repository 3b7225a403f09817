use std::{sync::OnceLock, time::Instant};

use common::{search_query::SearchQuery, search_result::SearchResult, suggestions::Suggestions};
use reqwest::{RequestBuilder, Response, header::CONTENT_TYPE};
use tracing::{info, warn};

use crate::{config::FoodbookConfig, foodbook_utils::contract_checks::{check_search_result, check_suggestions}};

const API_KEY_HEADER: &str = "X-Api-Key";

static SHARED: OnceLock<FoodbookClient> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct FoodbookClient {
    config: FoodbookConfig,
    http: reqwest::Client,
}

impl FoodbookClient {
    pub fn new(config: FoodbookConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { config, http })
    }

    /// Process wide client, configured from the environment on first use.
    ///
    /// Server functions and the router share it, so they share one connection pool.
    pub fn shared() -> anyhow::Result<&'static Self> {
        if let Some(client) = SHARED.get() {
            return Ok(client);
        }
        let client = Self::new(FoodbookConfig::from_env())?;
        Ok(SHARED.get_or_init(|| client))
    }

    pub fn config(&self) -> &FoodbookConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    /// Sends the request and returns the body text of a 2xx response.
    async fn send_for_text(&self, request: RequestBuilder) -> anyhow::Result<String> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        Ok(response_txt)
    }

    pub async fn fetch_autocomplete(&self, keyword: &str, locale: &str) -> anyhow::Result<Suggestions> {
        let t0 = Instant::now();
        let request = self
            .http
            .get(self.config.endpoint("autocomplete"))
            .query(&[("keyword", keyword), ("locale", locale)]);
        let response_txt = self.send_for_text(request).await.inspect_err(|e| {
            warn!("AUTOCOMPLETE FAILED for {keyword:?}: {e}");
        })?;
        let suggestions: Suggestions = serde_json::from_str(&response_txt)?;
        check_suggestions(&suggestions)?;
        info!(
            "AUTOCOMPLETE {keyword:?} ({locale}): {} suggestions in {}ms",
            suggestions.len(),
            t0.elapsed().as_millis()
        );
        Ok(suggestions)
    }

    pub async fn search(&self, query: &SearchQuery) -> anyhow::Result<SearchResult> {
        let t0 = Instant::now();
        let body = serde_json::to_string(query)?;
        let request = self
            .http
            .post(self.config.endpoint("search"))
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let response_txt = self.send_for_text(request).await.inspect_err(|e| {
            warn!("SEARCH FAILED for {:?} page {}: {e}", query.keyword, query.page_index);
        })?;
        let result: SearchResult = serde_json::from_str(&response_txt)?;
        check_search_result(&result, query)?;
        info!(
            "SEARCH {:?} with {} filters, page {}: {} results in {}ms",
            query.keyword,
            query.filters.len(),
            query.page_index,
            result.results,
            t0.elapsed().as_millis()
        );
        Ok(result)
    }

    /// Raw GET passthrough used by the reverse proxy route; any status is returned as is.
    pub async fn forward_get(&self, path: &str, raw_query: Option<&str>) -> anyhow::Result<Response> {
        let mut url = self.config.endpoint(path);
        if let Some(raw_query) = raw_query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(raw_query);
        }
        info!("FORWARD GET {url}");
        Ok(self.authorize(self.http.get(url)).send().await?)
    }
}
