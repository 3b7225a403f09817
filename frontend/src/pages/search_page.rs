use dioxus::prelude::*;

use common::{
    result_page::{BrandScope, ResultPageController},
    search_const::normalize_locale,
};
use crate::{
    components::{
        error_boundary::ComponentErrorBoundary,
        search_components::{
            search_facets::SearchFacetPanel,
            search_input_top_bar::SearchInputTopBar,
            search_results_view::SearchResultsView,
        },
    },
    data_definitions::{initial_search::InitialSearch, url_param::UrlParam},
    hooks::{use_autocomplete::use_autocomplete, use_result_page::use_result_page},
};


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Product search page
#[component]
pub fn SearchPage(locale: String, initial: UrlParam<InitialSearch>) -> Element {
    let locale = normalize_locale(&locale).to_string();
    let title = title_ellipsis(&initial.0.keyword);
    let page_key = format!("{locale}-{initial}");
    rsx! {
        Title { "Foodbook: {title}" }
        // a new url means a fresh page state
        SearchPageRootComponent {
            key: "{page_key}",
            locale,
            initial: initial.0.clone(),
            brand: None,
        }
    }
}

/// Search page, optionally scoped to a single brand.
#[component]
pub fn SearchPageRootComponent(
    locale: String,
    initial: InitialSearch,
    #[props(!optional)] brand: Option<BrandScope>,
) -> Element {
    let autocomplete = use_autocomplete(locale.clone(), initial.keyword.clone());
    use_context_provider(move || autocomplete);

    let result_page = use_result_page(move || {
        let controller = ResultPageController::new(locale).with_initial(&initial.keyword, initial.filters);
        match brand {
            Some(brand) => controller.with_brand(brand),
            None => controller,
        }
    });
    use_context_provider(move || result_page);

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputTopBar {}
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-search-facets-left-panel",
                    style: "
                        height: 100%;
                        min-width: 260px;
                        width: 25%;
                        overflow-y: auto;
                        border-right: 1px solid rgb(164, 164, 164);
                    ",
                    ComponentErrorBoundary { SearchFacetPanel {} }
                }
                div {
                    id: "x-search-results-right-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        flex-grow: 1;
                        min-width: 400px;
                        width: 75%;
                    ",
                    ComponentErrorBoundary { SearchResultsView {} }
                }
            }
        }
    }
}
