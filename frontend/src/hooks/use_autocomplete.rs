use std::time::Duration;

use common::{autocomplete::AutocompleteState, debounce::QueryDebouncer};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api::search_api::fetch_autocomplete;

/// Handle to the search box state, shared through context.
#[derive(Clone, Copy)]
pub struct AutocompleteControl {
    pub state: Signal<AutocompleteState>,
    pub on_input: Callback<String>,
    pub select_query: Callback<String>,
    pub clear_search: Callback<()>,
    pub commit_search: Callback<()>,
    pub set_panel_open: Callback<bool>,
}

/// Debounces typed input and keeps only the suggestions of the latest commit.
///
/// Timers and requests are tasks of the calling component, so they are
/// cancelled together with it.
pub fn use_autocomplete(locale: String, initial_query: String) -> AutocompleteControl {
    let mut state = use_signal(move || {
        let mut state = AutocompleteState::new(locale);
        state.set_query(&initial_query);
        state
    });
    let mut debouncer = use_signal(QueryDebouncer::default);

    let on_input = use_callback(move |raw: String| {
        state.write().set_query(&raw);
        let ticket = debouncer.write().push(&raw);
        let delay = debouncer.peek().delay();
        spawn(async move {
            TimeoutFuture::new(as_millis(delay)).await;
            let Some(committed) = debouncer.write().commit(ticket) else {
                return;
            };
            let Some(request) = state.write().on_commit(&committed) else {
                return;
            };
            let response = fetch_autocomplete(request.keyword, request.locale).await;
            state.write().on_response(request.seq, response.map_err(|e| e.to_string()));
        });
    });

    // picking a suggestion fills the box without asking for new suggestions
    let select_query = use_callback(move |picked: String| {
        debouncer.write().cancel();
        let mut state = state.write();
        // an empty commit supersedes in-flight requests and hides the panel
        let _ = state.on_commit("");
        state.set_query(&picked);
    });

    let clear_search = use_callback(move |_: ()| {
        debouncer.write().cancel();
        state.write().clear_search();
    });

    let commit_search = use_callback(move |_: ()| {
        debouncer.write().cancel();
        state.write().commit_search();
    });

    let set_panel_open = use_callback(move |open: bool| {
        if open {
            state.write().reveal_suggestions();
        } else {
            state.write().hide_suggestions();
        }
    });

    AutocompleteControl { state, on_input, select_query, clear_search, commit_search, set_panel_open }
}

fn as_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
