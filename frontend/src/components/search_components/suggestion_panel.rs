//! Dropdown with the autocomplete suggestions of the latest committed query.

use dioxus::prelude::*;
use common::{
    messages::Message,
    search_const::{BRAND_FACET, PRODUCER_FACET, WHOLESALER_FACET},
    suggestions::Suggestions,
};

use crate::hooks::{use_autocomplete::AutocompleteControl, use_result_page::ResultPageControl};

/// What happens when a suggestion is picked.
#[derive(Debug, Clone, PartialEq)]
enum SuggestionPick {
    Keyword(String),
    Facet { key: &'static str, id: u64 },
}

#[derive(Debug, Clone, PartialEq)]
struct SuggestionRow {
    label: String,
    detail: Option<String>,
    pick: SuggestionPick,
}

/// Brand picks are left out on a brand page, where the brand is fixed.
fn suggestion_sections(suggestions: &Suggestions, brand_scoped: bool) -> Vec<(Message, Vec<SuggestionRow>)> {
    let facet_rows = |key: &'static str, items: &[common::suggestions::SuggestionItem]| {
        items
            .iter()
            .map(|item| SuggestionRow { label: item.name.clone(), detail: None, pick: SuggestionPick::Facet { key, id: item.id } })
            .collect::<Vec<_>>()
    };
    let brands = if brand_scoped { vec![] } else { facet_rows(BRAND_FACET, &suggestions.brands) };
    let products = suggestions
        .products
        .iter()
        .map(|item| SuggestionRow { label: item.name.clone(), detail: None, pick: SuggestionPick::Keyword(item.name.clone()) })
        .collect();
    let wholesalers = suggestions
        .wholesalers
        .iter()
        .map(|item| SuggestionRow {
            label: item.name.clone(),
            detail: item.article_number.clone(),
            pick: SuggestionPick::Facet { key: WHOLESALER_FACET, id: item.id },
        })
        .collect();

    vec![
        (Message::SuggestedProducts, products),
        (Message::SuggestedBrands, brands),
        (Message::SuggestedProducers, facet_rows(PRODUCER_FACET, &suggestions.producers)),
        (Message::SuggestedWholesalers, wholesalers),
    ]
    .into_iter()
    .filter(|(_, rows)| !rows.is_empty())
    .collect()
}

#[component]
pub fn SuggestionPanel() -> Element {
    let autocomplete = use_context::<AutocompleteControl>();
    let result_page = use_context::<ResultPageControl>();
    let state = autocomplete.state;

    let state = state.read();
    let locale = state.locale().to_string();
    if let Some(error) = state.error() {
        return rsx! {
            div {
                style: "position: absolute; top: 70px; left: 0px; z-index: 1000; color: darkred; background: white; padding: 10px; border-radius: 10px; border: 1px solid rgba(0,0,0,0.5);",
                "{error}"
            }
        };
    }
    if !state.show_suggestions() {
        return rsx! {};
    }
    let Some(suggestions) = state.suggestions() else {
        return rsx! {};
    };
    let brand_scoped = result_page.controller.read().brand().is_some();
    let sections = suggestion_sections(suggestions, brand_scoped)
        .into_iter()
        .map(|(title, rows)| (title.text(&locale), rows))
        .collect::<Vec<_>>();
    if sections.is_empty() {
        return rsx! {};
    }

    let pick = move |pick: SuggestionPick| {
        autocomplete.set_panel_open.call(false);
        match pick {
            SuggestionPick::Keyword(keyword) => {
                autocomplete.select_query.call(keyword.clone());
                result_page.set_keyword.call(keyword);
            }
            SuggestionPick::Facet { key, id } => {
                result_page.set_checked.call((key.to_string(), vec![id], true));
            }
        }
    };

    rsx! {
        div {
            id: "x-suggestion-panel",
            style: "
                position: absolute;
                top: 70px;
                left: 0px;
                width: 500px;
                max-height: calc(100vh - 120px);
                overflow-y: auto;
                background-color: white;
                border: 1px solid rgba(0,0,0,0.5);
                border-radius: 10px;
                padding: 10px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                z-index: 1000;
            ",
            for (title, rows) in sections {
                div {
                    key: "{title}",
                    h3 {
                        style: "font-size: 14px; font-weight: 600; color: rgba(28, 33, 45, 0.7); margin: 6px 4px;",
                        "{title}"
                    }
                    ul {
                        for row in rows {
                            li {
                                key: "{row.label}-{row.pick:?}",
                                style: "cursor: pointer; padding: 4px; font-size: 18px;",
                                onclick: {
                                    let chosen = row.pick.clone();
                                    move |_| pick(chosen.clone())
                                },
                                "{row.label}"
                                if let Some(detail) = &row.detail {
                                    span { style: "color: rgba(0,0,0,0.5); margin-left: 8px;", "{detail}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
