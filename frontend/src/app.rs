use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component: stylesheet, default title and the router.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Foodbook" }
        GlobalErrorBoundary {
            boundary_name: "Foodbook".to_string(),
            Router::<Route> {}
        }
    }
}
