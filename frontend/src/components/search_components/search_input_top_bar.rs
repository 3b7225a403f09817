use dioxus::prelude::*;
use common::messages::Message;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};

use crate::{
    components::search_components::suggestion_panel::SuggestionPanel,
    hooks::{use_autocomplete::AutocompleteControl, use_result_page::ResultPageControl},
};


#[component]
pub fn SearchInputTopBar() -> Element {
    let autocomplete = use_context::<AutocompleteControl>();
    let result_page = use_context::<ResultPageControl>();
    let state = autocomplete.state;
    let controller = result_page.controller;

    let locale = use_memo(move || state.read().locale().to_string());
    let query = use_memo(move || state.read().query().to_string());
    let query_has_changed = use_memo(move || query().trim() != controller.read().keyword());
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });

    let trigger_search = move |_: ()| {
        autocomplete.commit_search.call(());
        result_page.set_keyword.call(query());
    };
    let search_oninput = move |event: Event<FormData>| {
        autocomplete.on_input.call(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        match event.key() {
            Key::Enter => trigger_search(()),
            Key::Escape => autocomplete.set_panel_open.call(false),
            _ => {}
        }
    };
    let clear_onclick = move |_| {
        autocomplete.clear_search.call(());
        result_page.set_keyword.call(String::new());
    };

    rsx! {
        div {
            style: "position: relative; margin-left: 16px;",
            div {
                id: "x-search-input-search-box",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 16px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 44px;
                    color: #111827;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    width: 500px;
                ",

                button {
                    style: "
                        border: none;
                        background: none;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        trigger_search(())
                    },
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
                }
                input {
                    r#type: "text",
                    placeholder: Message::SearchPlaceholder.text(&locale()),
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 20px;
                        font-weight: 400;
                        font-family: Roboto, sans-serif;
                    ",
                    value: "{query}",
                    oninput: search_oninput,
                    onkeydown: search_onkeydown,
                    onfocus: move |_| autocomplete.set_panel_open.call(true),
                }
                if !query().is_empty() {
                    button {
                        title: Message::ClearSearch.text(&locale()),
                        style: "
                            border: none;
                            background: none;
                            cursor: pointer;
                        ",
                        onclick: clear_onclick,
                        Icon { icon: MdClose, style: "width: 20px; height: 20px; color:#6B7280;" }
                    }
                }
            }
            SuggestionPanel {}
        }
    }
}
