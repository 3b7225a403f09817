//! Result page controller: keyword, filters and page index in, one search request out.
//!
//! The controller never performs I/O. Every mutation returns a [`SearchPlan`]
//! telling the driver whether to send a request; responses come back through
//! [`ResultPageController::on_response`] together with the sequence number of
//! the request they answer. Only the latest request may update the page.

use tracing::debug;

use crate::{
    filter_set::{FilterSet, ItemBetween},
    messages::Message,
    pagination::Pagination,
    search_const::{BRAND_FACET, PAGE_SIZE},
    search_query::SearchQuery,
    search_result::SearchResult,
};


/// Fixed brand constraint of a brand landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandScope {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPlan {
    /// Nothing relevant changed; keep showing what is there.
    Unchanged,
    /// No keyword, no filters, nothing shown yet: do not fetch everything.
    NoFiltersUsed,
    Request(SearchTicket),
}

/// Everything the result renderer needs to draw the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView<'a> {
    pub is_loading: bool,
    pub error: Option<&'a str>,
    pub search_result: Option<&'a SearchResult>,
    pub keyword: &'a str,
    pub current_page: u32,
    pub total_pages: u32,
    pub brand: Option<&'a BrandScope>,
    pub no_filters_used: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPageController {
    locale: String,
    page_size: u32,
    brand: Option<BrandScope>,
    keyword: String,
    filters: FilterSet,
    pagination: Pagination,
    search_result: Option<SearchResult>,
    is_loading: bool,
    error: Option<String>,
    no_filters_used: bool,
    latest_request: u64,
}

impl ResultPageController {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            page_size: PAGE_SIZE,
            brand: None,
            keyword: String::new(),
            filters: FilterSet::new(),
            pagination: Pagination::default(),
            search_result: None,
            is_loading: false,
            error: None,
            no_filters_used: false,
            latest_request: 0,
        }
    }

    pub fn with_brand(mut self, brand: BrandScope) -> Self {
        self.brand = Some(brand);
        self
    }

    /// Starting keyword and filters, e.g. restored from the page URL.
    pub fn with_initial(mut self, keyword: &str, filters: FilterSet) -> Self {
        self.keyword = keyword.trim().to_string();
        self.filters = filters;
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn brand(&self) -> Option<&BrandScope> {
        self.brand.as_ref()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn search_result(&self) -> Option<&SearchResult> {
        self.search_result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> ResultView<'_> {
        ResultView {
            is_loading: self.is_loading,
            error: self.error.as_deref(),
            search_result: self.search_result.as_ref(),
            keyword: &self.keyword,
            current_page: self.pagination.current_page,
            total_pages: self.pagination.total_pages,
            brand: self.brand.as_ref(),
            no_filters_used: self.no_filters_used,
        }
    }

    /// The request for the current keyword, filters and page.
    ///
    /// A brand scope replaces whatever Brand values were picked, so a brand
    /// page never widens to other brands.
    pub fn current_query(&self) -> SearchQuery {
        let mut filters = self.filters.clone();
        if let Some(brand) = &self.brand {
            filters.remove_key(BRAND_FACET);
            filters.set_checked(BRAND_FACET, &[brand.id], true);
        }
        SearchQuery {
            keyword: self.keyword.clone(),
            filters,
            page_index: self.pagination.current_page.saturating_sub(1),
            page_size: self.page_size,
            locale: self.locale.clone(),
        }
    }

    /// Plans a search for the current state, superseding anything in flight.
    pub fn refresh(&mut self) -> SearchPlan {
        self.latest_request += 1;
        self.error = None;
        if self.search_result.is_none() && self.current_query().is_unconstrained() {
            self.is_loading = false;
            self.no_filters_used = true;
            return SearchPlan::NoFiltersUsed;
        }
        self.no_filters_used = false;
        self.is_loading = true;
        SearchPlan::Request(SearchTicket { seq: self.latest_request, query: self.current_query() })
    }

    fn restart_from_first_page(&mut self, changed: bool) -> SearchPlan {
        if !changed {
            return SearchPlan::Unchanged;
        }
        self.pagination.current_page = 1;
        self.refresh()
    }

    pub fn set_keyword(&mut self, keyword: &str) -> SearchPlan {
        let keyword = keyword.trim();
        let changed = keyword != self.keyword;
        if changed {
            self.keyword = keyword.to_string();
        }
        self.restart_from_first_page(changed)
    }

    pub fn set_checked(&mut self, key: &str, ids: &[u64], checked: bool) -> SearchPlan {
        let changed = self.filters.set_checked(key, ids, checked);
        self.restart_from_first_page(changed)
    }

    pub fn set_range(&mut self, key: &str, range: ItemBetween) -> SearchPlan {
        let changed = self.filters.set_range(key, range);
        self.restart_from_first_page(changed)
    }

    pub fn clear_range(&mut self, key: &str, range_id: u64) -> SearchPlan {
        let changed = self.filters.clear_range(key, range_id);
        self.restart_from_first_page(changed)
    }

    pub fn clear_filters(&mut self) -> SearchPlan {
        let changed = self.filters.clear();
        self.restart_from_first_page(changed)
    }

    /// Re-issues the search for `page` with keyword and filters unchanged.
    pub fn on_page_change(&mut self, page: u32) -> SearchPlan {
        let page = self.pagination.clamp(page);
        if page == self.pagination.current_page {
            return SearchPlan::Unchanged;
        }
        self.pagination.current_page = page;
        self.refresh()
    }

    /// Applies a search response. Returns `false` when it belonged to a superseded request.
    ///
    /// A failure keeps the last successful result on screen next to the error.
    pub fn on_response(&mut self, seq: u64, response: Result<SearchResult, String>) -> bool {
        if seq != self.latest_request {
            debug!("discarding stale search response #{seq} (latest #{})", self.latest_request);
            return false;
        }
        self.is_loading = false;
        match response {
            Ok(result) => {
                self.pagination = Pagination::from_results(self.pagination.current_page, result.results, self.page_size);
                self.search_result = Some(result);
                self.error = None;
            }
            Err(e) => {
                debug!("search request #{seq} failed: {e}");
                self.error = Some(Message::SearchFailed.text(&self.locale).to_string());
            }
        }
        true
    }

    /// Marks whatever is in flight as ignorable, e.g. when the page goes away.
    pub fn cancel_pending(&mut self) {
        self.latest_request += 1;
        self.is_loading = false;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filter_set::Filter, search_result::SearchProduct};
    use pretty_assertions::assert_eq;

    fn result_with(results: u64, product_name: &str) -> SearchResult {
        SearchResult {
            results,
            products: vec![SearchProduct {
                id: 1,
                name: product_name.to_string(),
                brand: None,
                image_url: None,
                article_number: None,
                has_spec_sheet: false,
            }],
            ..Default::default()
        }
    }

    fn expect_request(plan: SearchPlan) -> SearchTicket {
        match plan {
            SearchPlan::Request(ticket) => ticket,
            other => panic!("expected a request, got {other:?}"),
        }
    }

    #[test]
    fn unconstrained_first_search_shows_no_filters_used() {
        let mut controller = ResultPageController::new("nl");
        assert_eq!(controller.refresh(), SearchPlan::NoFiltersUsed);
        let view = controller.view();
        assert!(view.no_filters_used);
        assert!(!view.is_loading);
        assert_eq!(view.search_result, None);
    }

    #[test]
    fn blank_keyword_is_unconstrained() {
        let mut controller = ResultPageController::new("nl");
        assert_eq!(controller.set_keyword("   "), SearchPlan::Unchanged);
        assert_eq!(controller.refresh(), SearchPlan::NoFiltersUsed);
    }

    #[test]
    fn keyword_filters_and_page_compose_one_request() {
        let mut controller = ResultPageController::new("en");
        controller.set_keyword("melk");
        let ticket = expect_request(controller.set_checked("Brand", &[12, 34], true));
        assert!(controller.is_loading());
        assert_eq!(ticket.query.keyword, "melk");
        assert_eq!(ticket.query.filters.as_slice(), &[Filter::with_values("Brand", vec![12, 34])]);
        assert_eq!(ticket.query.page_index, 0);
        assert_eq!(ticket.query.page_size, PAGE_SIZE);
        assert_eq!(ticket.query.locale, "en");
    }

    #[test]
    fn response_sets_totals_and_page_change_keeps_query() {
        let mut controller = ResultPageController::new("nl");
        let first = expect_request(controller.set_keyword("kaas"));
        assert!(controller.on_response(first.seq, Ok(result_with(50, "Gouda"))));
        assert_eq!(controller.pagination(), Pagination { current_page: 1, total_pages: 3 });

        let second = expect_request(controller.on_page_change(2));
        assert_eq!(second.query.page_index, 1);
        assert_eq!(second.query.keyword, "kaas");
        assert_eq!(controller.view().current_page, 2);

        assert_eq!(controller.on_page_change(2), SearchPlan::Unchanged);
        let clamped = expect_request(controller.on_page_change(99));
        assert_eq!(clamped.query.page_index, 2);
    }

    #[test]
    fn filter_change_restarts_at_first_page() {
        let mut controller = ResultPageController::new("nl");
        let ticket = expect_request(controller.set_keyword("kaas"));
        controller.on_response(ticket.seq, Ok(result_with(100, "Gouda")));
        controller.on_page_change(3);

        let ticket = expect_request(controller.set_checked("Producer", &[4], true));
        assert_eq!(ticket.query.page_index, 0);
        assert_eq!(controller.set_checked("Producer", &[4], true), SearchPlan::Unchanged);
    }

    #[test]
    fn newer_request_wins_over_late_older_response() {
        let mut controller = ResultPageController::new("nl");
        let older = expect_request(controller.set_keyword("milk"));
        let newer = expect_request(controller.set_keyword("milk2"));

        assert!(controller.on_response(newer.seq, Ok(result_with(1, "milk2"))));
        assert!(!controller.on_response(older.seq, Ok(result_with(1, "milk"))));
        assert_eq!(controller.search_result().unwrap().products[0].name, "milk2");
    }

    #[test]
    fn failure_keeps_previous_result_and_reports_error() {
        let mut controller = ResultPageController::new("en");
        let ok = expect_request(controller.set_keyword("kaas"));
        controller.on_response(ok.seq, Ok(result_with(3, "Gouda")));

        let failing = expect_request(controller.set_keyword("kaas belegen"));
        controller.on_response(failing.seq, Err("500 Internal Server Error".to_string()));
        let view = controller.view();
        assert_eq!(view.error, Some(Message::SearchFailed.text("en")));
        assert_eq!(view.search_result.unwrap().products[0].name, "Gouda");
        assert!(!view.is_loading);

        let retry = expect_request(controller.refresh());
        assert_eq!(controller.error(), None);
        controller.on_response(retry.seq, Ok(result_with(0, "none")));
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn clearing_everything_after_a_result_still_searches() {
        let mut controller = ResultPageController::new("nl");
        let ticket = expect_request(controller.set_checked("Brand", &[1], true));
        controller.on_response(ticket.seq, Ok(result_with(1, "Gouda")));
        assert!(matches!(controller.set_checked("Brand", &[1], false), SearchPlan::Request(_)));
    }

    #[test]
    fn brand_scope_overrides_picked_brands() {
        let brand = BrandScope { id: 77, name: "Zuivelhoeve".to_string() };
        let mut controller = ResultPageController::new("nl").with_brand(brand.clone());
        let ticket = expect_request(controller.refresh());
        assert_eq!(ticket.query.filters.values(BRAND_FACET), &[77]);
        assert!(controller.filters().is_empty());

        controller.set_checked("Producer", &[3], true);
        let ticket = expect_request(controller.set_checked(BRAND_FACET, &[5], true));
        assert_eq!(ticket.query.filters.values(BRAND_FACET), &[77]);
        assert_eq!(ticket.query.filters.values("Producer"), &[3]);
        assert_eq!(controller.view().brand, Some(&brand));
    }

    #[test]
    fn cancel_pending_ignores_in_flight_response() {
        let mut controller = ResultPageController::new("nl");
        let ticket = expect_request(controller.set_keyword("kaas"));
        controller.cancel_pending();
        assert!(!controller.is_loading());
        assert!(!controller.on_response(ticket.seq, Ok(result_with(1, "Gouda"))));
        assert_eq!(controller.search_result(), None);
    }

    #[test]
    fn ranges_restart_search() {
        let mut controller = ResultPageController::new("nl");
        let ticket = expect_request(controller.set_range("Voedingswaarde", ItemBetween { id: 3, minimal: 0.0, maximum: 5.0 }));
        assert_eq!(ticket.query.filters.get("Voedingswaarde").unwrap().item_between.len(), 1);
        controller.on_response(ticket.seq, Ok(result_with(1, "Gouda")));
        assert!(matches!(controller.clear_range("Voedingswaarde", 3), SearchPlan::Request(_)));
        assert_eq!(controller.clear_filters(), SearchPlan::Unchanged);
    }

    #[test]
    fn initial_state_is_used_for_first_request() {
        let mut filters = FilterSet::new();
        filters.set_checked("Brand", &[2], true);
        let mut controller = ResultPageController::new("nl").with_initial(" melk ", filters.clone());
        let ticket = expect_request(controller.refresh());
        assert_eq!(ticket.query.keyword, "melk");
        assert_eq!(ticket.query.filters, filters);
    }
}
