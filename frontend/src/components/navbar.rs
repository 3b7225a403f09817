//! Side navigation shared by all pages.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use common::search_const::{DEFAULT_LOCALE, SUPPORTED_LOCALES};
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

const SIDEBAR_COLUMN: &str = "display:flex; flex-direction: column; align-items: center; gap: 24px;";

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "display:flex; flex-direction: row; width: 100%; height: 100%;",
            nav {
                id: "x-nav-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    justify-content: space-between;
                    width: 70px;
                    padding: 16px;
                    background-color: #1C2D21;
                ",
                div {
                    style: SIDEBAR_COLUMN,
                    IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                    IconLink { to: Route::empty_search(DEFAULT_LOCALE), icon: MdSearch, label: "Search" }
                }
                // one empty search per shipped locale
                div {
                    style: SIDEBAR_COLUMN,
                    for locale in SUPPORTED_LOCALES {
                        Link {
                            key: "{locale}",
                            to: Route::empty_search(locale),
                            span { style: "color:white; font-size: 14px; text-transform: uppercase;", "{locale}" }
                        }
                    }
                }
            }
            main {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
