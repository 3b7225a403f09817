//! Autocomplete suggestion state for the search box.
//!
//! Holds a single suggestion set: the one belonging to the most recently
//! committed query. Every commit takes a new request sequence number, and a
//! response is only applied when it carries the latest one, so a slow answer
//! for an older query can never overwrite a newer one.

use tracing::debug;

use crate::{messages::Message, search_const::MIN_QUERY_CHARS, suggestions::Suggestions};


/// A request the driver has to send to the autocomplete service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteRequest {
    pub seq: u64,
    pub keyword: String,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteState {
    locale: String,
    query: String,
    suggestions: Option<Suggestions>,
    show_suggestions: bool,
    loading: bool,
    error: Option<String>,
    latest_request: u64,
}

impl AutocompleteState {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            query: String::new(),
            suggestions: None,
            show_suggestions: false,
            loading: false,
            error: None,
            latest_request: 0,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> Option<&Suggestions> {
        self.suggestions.as_ref()
    }

    pub fn show_suggestions(&self) -> bool {
        self.show_suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Value of the input field; does not commit anything.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.to_string();
    }

    /// Handles a debounced commit. Returns the request to send, if any.
    pub fn on_commit(&mut self, committed: &str) -> Option<AutocompleteRequest> {
        self.latest_request += 1;
        let keyword = committed.trim();
        if keyword.chars().count() < MIN_QUERY_CHARS {
            self.suggestions = None;
            self.error = None;
            self.loading = false;
            self.show_suggestions = false;
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(AutocompleteRequest { seq: self.latest_request, keyword: keyword.to_string(), locale: self.locale.clone() })
    }

    /// Applies a response. Returns `false` when it belonged to a superseded request.
    pub fn on_response(&mut self, seq: u64, response: Result<Suggestions, String>) -> bool {
        if seq != self.latest_request {
            debug!("discarding stale autocomplete response #{seq} (latest #{})", self.latest_request);
            return false;
        }
        match response {
            Ok(suggestions) => {
                self.suggestions = Some(suggestions);
                self.show_suggestions = true;
            }
            Err(e) => {
                debug!("autocomplete request #{seq} failed: {e}");
                self.suggestions = None;
                self.error = Some(Message::AutocompleteFailed.text(&self.locale).to_string());
            }
        }
        self.loading = false;
        true
    }

    /// The typed query was submitted as a search: nothing in flight may reopen the panel.
    pub fn commit_search(&mut self) {
        self.latest_request += 1;
        self.show_suggestions = false;
        self.loading = false;
    }

    pub fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
    }

    /// Reopens the panel after it was hidden, when there is something to show.
    pub fn reveal_suggestions(&mut self) {
        self.show_suggestions = self.suggestions.as_ref().is_some_and(|s| !s.is_empty());
    }

    pub fn clear_search(&mut self) {
        self.latest_request += 1;
        self.query.clear();
        self.suggestions = None;
        self.show_suggestions = false;
        self.error = None;
        self.loading = false;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::SuggestionItem;
    use pretty_assertions::assert_eq;

    fn suggestions_named(name: &str) -> Suggestions {
        Suggestions {
            products: vec![SuggestionItem { id: 1, name: name.to_string() }],
            ..Default::default()
        }
    }

    #[test]
    fn short_queries_never_request() {
        let mut state = AutocompleteState::new("nl");
        let request = state.on_commit("milk").unwrap();
        state.on_response(request.seq, Ok(suggestions_named("milk")));
        assert!(state.show_suggestions());

        for short in ["", " ", "m", " m ", "é"] {
            assert_eq!(state.on_commit(short), None, "{short:?} must not reach the network");
            assert_eq!(state.suggestions(), None);
            assert_eq!(state.error(), None);
            assert!(!state.show_suggestions());
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn commit_marks_loading_and_success_opens_panel() {
        let mut state = AutocompleteState::new("en");
        let request = state.on_commit("  kaas ").unwrap();
        assert_eq!(request.keyword, "kaas");
        assert_eq!(request.locale, "en");
        assert!(state.is_loading());

        assert!(state.on_response(request.seq, Ok(suggestions_named("kaas"))));
        assert!(!state.is_loading());
        assert!(state.show_suggestions());
        assert_eq!(state.suggestions(), Some(&suggestions_named("kaas")));
    }

    #[test]
    fn failure_clears_suggestions_and_keeps_panel_flag() {
        let mut state = AutocompleteState::new("en");
        let request = state.on_commit("kaas").unwrap();
        state.on_response(request.seq, Ok(suggestions_named("kaas")));

        let request = state.on_commit("kaas2").unwrap();
        state.on_response(request.seq, Err("502 Bad Gateway".to_string()));
        assert_eq!(state.suggestions(), None);
        assert_eq!(state.error(), Some(Message::AutocompleteFailed.text("en")));
        assert!(state.show_suggestions());
        assert!(!state.is_loading());

        let request = state.on_commit("kaas3").unwrap();
        assert_eq!(state.error(), None);
        state.hide_suggestions();
        state.on_response(request.seq, Err("timeout".to_string()));
        assert!(!state.show_suggestions());
    }

    #[test]
    fn out_of_order_responses_keep_latest_query() {
        let mut state = AutocompleteState::new("nl");
        let milk = state.on_commit("milk").unwrap();
        let milk2 = state.on_commit("milk2").unwrap();

        assert!(state.on_response(milk2.seq, Ok(suggestions_named("milk2"))));
        assert!(!state.on_response(milk.seq, Ok(suggestions_named("milk"))));

        assert_eq!(state.suggestions(), Some(&suggestions_named("milk2")));
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_response_after_short_query_is_ignored() {
        let mut state = AutocompleteState::new("nl");
        let milk = state.on_commit("milk").unwrap();
        assert_eq!(state.on_commit("m"), None);
        assert!(!state.on_response(milk.seq, Ok(suggestions_named("milk"))));
        assert_eq!(state.suggestions(), None);
        assert!(!state.show_suggestions());
    }

    #[test]
    fn clear_search_resets_everything_and_invalidates_in_flight() {
        let mut state = AutocompleteState::new("nl");
        state.set_query("milk");
        let request = state.on_commit("milk").unwrap();
        state.clear_search();

        assert_eq!(state.query(), "");
        assert!(!state.is_loading());
        assert!(!state.on_response(request.seq, Ok(suggestions_named("milk"))));
        assert_eq!(state.suggestions(), None);
        assert!(!state.show_suggestions());
    }

    #[test]
    fn submitted_search_keeps_late_suggestions_closed() {
        let mut state = AutocompleteState::new("nl");
        state.set_query("melk");
        let request = state.on_commit("melk").unwrap();
        state.commit_search();

        assert!(!state.is_loading());
        assert!(!state.on_response(request.seq, Ok(suggestions_named("melk"))));
        assert!(!state.show_suggestions());
        assert_eq!(state.query(), "melk");

        let request = state.on_commit("melkpoeder").unwrap();
        assert!(state.on_response(request.seq, Ok(suggestions_named("melkpoeder"))));
        assert!(state.show_suggestions());
    }

    #[test]
    fn reveal_only_with_suggestions() {
        let mut state = AutocompleteState::new("nl");
        state.reveal_suggestions();
        assert!(!state.show_suggestions());

        let request = state.on_commit("milk").unwrap();
        state.on_response(request.seq, Ok(suggestions_named("milk")));
        state.hide_suggestions();
        state.reveal_suggestions();
        assert!(state.show_suggestions());
    }
}
