use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::initial_search::InitialSearch;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::brand_page::BrandPage;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/:locale/foodbook/:initial")]
    SearchPage {
        locale: String,
        initial: UrlParam<InitialSearch>,
    },


    #[route("/:locale/brand/:brand_id/:brand_name")]
    BrandPage { locale: String, brand_id: u64, brand_name: String },

}

impl Route {
    pub fn search_page(locale: &str, initial: InitialSearch) -> Self {
        Self::SearchPage {
            locale: locale.to_string(),
            initial: UrlParam::from(initial),
        }
    }

    pub fn empty_search(locale: &str) -> Self {
        Self::search_page(locale, InitialSearch::default())
    }
}
