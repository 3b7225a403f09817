//! Result list: the renderer side of the result page controller.

use dioxus::prelude::*;
use common::messages::Message;

use crate::{
    components::{
        error_boundary::ComponentErrorDisplay,
        loading_indicator::LoadingIndicator,
        search_components::{
            search_result_item_card::SearchResultItemCard,
            search_result_list_controls::SearchResultListControls,
        },
    },
    hooks::use_result_page::ResultPageControl,
};


#[component]
pub fn SearchResultsView() -> Element {
    let result_page = use_context::<ResultPageControl>();
    let controller = result_page.controller.read();
    let view = controller.view();
    let locale = controller.locale();

    if view.no_filters_used {
        return rsx! { NoticeText { text: Message::NoFiltersUsed.text(locale).to_string() } };
    }
    // first search still running: nothing to show yet
    if view.search_result.is_none() {
        return match view.error {
            Some(error) => rsx! { ComponentErrorDisplay { error_txt: error.to_string() } },
            None if view.is_loading => rsx! { LoadingIndicator {} },
            None => rsx! {},
        };
    }

    let products = view.search_result.map(|r| r.products.clone()).unwrap_or_default();
    let first_index = controller.pagination().first_item_offset(controller.page_size());
    let error = view.error.map(str::to_string);
    let brand_name = view.brand.map(|b| b.name.clone());
    let no_products = products.is_empty();
    let loading_opacity = if view.is_loading { "0.5" } else { "1" };

    rsx! {
        div {
            id: "x-search-results-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                margin: 1px;
                padding: 7px;
                padding-top: 0px;
                height: 100%;
                width: 100%;
            ",
            if let Some(brand_name) = brand_name {
                h1 { style: "font-size: 28px; font-weight: 500; margin: 8px;", "{brand_name}" }
            }
            SearchResultListControls {}
            // a failed search keeps showing the previous page under the message
            if let Some(error) = error {
                div {
                    role: "alert",
                    style: "color: darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 8px;",
                    "{error}"
                }
            }
            if no_products {
                NoticeText { text: Message::NoResults.text(locale).to_string() }
            }
            ul {
                id: "x-search-panel-results-wrapper",
                style: "
                    width: 100%;
                    flex-grow: 1;
                    overflow-y: auto;
                    opacity: {loading_opacity};
                ",
                for (index, product) in products.into_iter().enumerate() {
                    li {
                        key: "{product.id}",
                        SearchResultItemCard { product, item_index: first_index + index as u64 + 1 }
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeText(text: String) -> Element {
    rsx! {
        div {
            style: "color: rgb(75, 87, 112); font-size: 20px; padding: 10px; margin: 15px;",
            "{text}"
        }
    }
}
