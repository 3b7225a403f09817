//! Search result item card component.

use dioxus::prelude::*;
use common::{messages::Message, search_result::SearchProduct};
use dioxus_free_icons::{Icon, icons::md_action_icons::{MdOpenInNew, MdShoppingBasket}};

use crate::hooks::use_result_page::ResultPageControl;

/// Link to the gated product sheet route of the server.
pub fn product_sheet_href(product_id: u64, locale: &str) -> String {
    format!("/_product_sheet/{product_id}?locale={locale}")
}

#[component]
pub fn SearchResultItemCard(product: ReadSignal<SearchProduct>, item_index: u64) -> Element {
    let result_page = use_context::<ResultPageControl>();
    let locale = use_memo(move || result_page.controller.read().locale().to_string());
    let SearchProduct {
        id,
        name,
        brand,
        image_url,
        article_number,
        has_spec_sheet,
    } = product.read().clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                min-height: 96px;
                width: calc(100% - 16px);
                box-sizing: border-box;
            ",
            span {
                style: "font-size: 20px; font-weight: 200; color: rgba(0, 0, 0, 0.5); padding: 1px 4px;",
                "{item_index}."
            }
            ProductImage { image_url, name: name.clone() }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    min-width: 0;
                    flex: 1;
                ",
                div {
                    style: "
                        font-size: 20px;
                        line-height: 28px;
                        font-weight: 400;
                        color: rgb(0, 0, 0);
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{name}"
                }
                if let Some(brand) = brand {
                    span {
                        style: "font-size: 16px; font-weight: 300; color: rgba(0, 0, 0, 0.6); font-style: italic;",
                        "{brand}"
                    }
                }
                if let Some(article_number) = article_number {
                    span { style: "font-size: 14px; color: rgba(0, 0, 0, 0.5);", "{article_number}" }
                }
            }
            if has_spec_sheet {
                ProductSheetLink { product_id: id, locale: locale() }
            }
        }
    }
}

#[component]
fn ProductImage(#[props(!optional)] image_url: Option<String>, name: String) -> Element {
    rsx! {
        div {
            style: "
                width: 72px;
                height: 72px;
                display: flex;
                align-items: center;
                justify-content: center;
                flex-shrink: 0;
                color: rgba(0, 0, 0, 0.5);
            ",
            {match image_url {
                Some(src) => rsx! { img { src: "{src}", alt: "{name}", style: "max-width: 72px; max-height: 72px;" } },
                None => rsx! { Icon { icon: MdShoppingBasket, style: "width: 36px; height: 36px;" } },
            }}
        }
    }
}

/// Opens the sheet in a new tab; the server answers 401 when nobody is logged in.
#[component]
fn ProductSheetLink(product_id: u64, locale: String) -> Element {
    let label = Message::ProductSheet.text(&locale);
    rsx! {
        a {
            href: product_sheet_href(product_id, &locale),
            target: "_blank",
            title: "{label}",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                color: rgb(28, 45, 33);
                font-size: 14px;
                flex-shrink: 0;
            ",
            Icon { icon: MdOpenInNew, style: "width: 20px; height: 20px;" }
            "{label}"
        }
    }
}
