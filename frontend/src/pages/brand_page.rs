use dioxus::prelude::*;

use common::{result_page::BrandScope, search_const::normalize_locale};
use crate::{data_definitions::initial_search::InitialSearch, pages::search_page::SearchPageRootComponent};

/// Brand landing page: the product search, restricted to one brand.
#[component]
pub fn BrandPage(locale: String, brand_id: u64, brand_name: String) -> Element {
    let locale = normalize_locale(&locale).to_string();
    let page_key = format!("{locale}-{brand_id}");
    rsx! {
        Title { "Foodbook: {brand_name}" }
        SearchPageRootComponent {
            key: "{page_key}",
            locale,
            initial: InitialSearch::default(),
            brand: Some(BrandScope { id: brand_id, name: brand_name.clone() }),
        }
    }
}
