use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::{messages::Message, search_const::{DEFAULT_LOCALE, SUPPORTED_LOCALES}};
use crate::data_definitions::initial_search::InitialSearch;
use crate::routes::Route;


/// Landing page with one search box per shipped locale.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Foodbook" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                height: 100%;
                padding: 36px 40px;
                background: #F4F7F2;
                box-sizing: border-box;
                overflow: auto;
            ",
            h1 {
                style: "font-size: 46px; font-weight: 500; color: #1B3A1F;",
                "Foodbook"
            }
            p {
                style: "font-size: 24px; line-height: 1.5; max-width: 640px; color: #111827;",
                "Find products, brands, producers and wholesalers, and narrow them down by nutritional values."
            }
            div {
                style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 20px;",
                for locale in SUPPORTED_LOCALES {
                    LocaleSearchCard { key: "{locale}", locale: locale.to_string() }
                }
            }
        }
    }
}

#[component]
fn LocaleSearchCard(locale: String) -> Element {
    let heading = if locale == DEFAULT_LOCALE { "Producten zoeken" } else { "Product search" };
    let placeholder = Message::SearchPlaceholder.text(&locale);
    let mut keyword = use_signal(String::new);
    let nav = navigator();

    rsx! {
        form {
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 480px;
                border-radius: 22px;
                padding: 22px;
                background: linear-gradient(135deg, #1B5E20 0%, #43A047 100%);
                color: white;
            ",
            onsubmit: move |e| {
                e.prevent_default();
                let initial = InitialSearch::from_keyword(keyword.read().trim());
                nav.push(Route::search_page(&locale, initial));
            },
            h2 { style: "font-size: 28px; font-weight: 500;", "{heading}" }
            label {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    color: #111827;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "search",
                    placeholder: "{placeholder}",
                    style: "flex:1; border: none; outline: none; background: transparent; font-size: 16px;",
                    oninput: move |e| keyword.set(e.value()),
                }
            }
        }
    }
}
