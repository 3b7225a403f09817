//! Result count and pagination controls above the result list.

use common::{messages::{results_found, Message}, pagination::Pagination};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::hooks::use_result_page::ResultPageControl;

#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-search-results-title-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                SearchResultsHitCountString { }
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            ControlNextPrevPage {}
        }
    }
}

#[component]
fn ControlNextPrevPage() -> Element {
    let result_page = use_context::<ResultPageControl>();
    let controller = result_page.controller;
    let set_current_page = result_page.on_page_change;

    let pagination = use_memo(move || controller.read().pagination());
    let locale = use_memo(move || controller.read().locale().to_string());
    let can_go_to_previous_page = use_memo(move || pagination().can_go_previous());
    let can_go_to_next_page = use_memo(move || pagination().can_go_next());
    let previous_label = Message::PreviousPage.text(&locale()).to_string();
    let next_label = Message::NextPage.text(&locale()).to_string();

    let Pagination { current_page, total_pages } = pagination();
    if total_pages == 0 {
        return rsx! {};
    }
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: previous_label,
                disabled: !can_go_to_previous_page(),
                onclick: move |_| set_current_page(pagination().current_page.saturating_sub(1)),
            }
            // current page counter
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    border-left: 1px solid rgba(0,0,0,0.1);
                    border-right: 1px solid rgba(0,0,0,0.1);
                    padding: 4px 26px;
                    margin-left: -28px;
                    margin-right: -28px;
                    align-items: center;
                    align-content: center;
                ",
                "{current_page}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{total_pages}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: next_label,
                disabled: !can_go_to_next_page(),
                onclick: move |_| set_current_page(pagination().current_page + 1),
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 26px; height: 26px; color: {btn_color};" }
        }
    }
}


#[component]
fn SearchResultsHitCountString() -> Element {
    let result_page = use_context::<ResultPageControl>();
    let controller = result_page.controller.read();
    let view = controller.view();

    let Some(result) = view.search_result else {
        return rsx! { "..." };
    };
    let found = results_found(result.results, controller.locale());
    let keyword = view.keyword;
    if keyword.is_empty() {
        rsx! { "{found}" }
    } else {
        rsx! { "{found}: \"{keyword}\"" }
    }
}
