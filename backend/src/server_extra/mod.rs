//! Plain axum routes served next to the Dioxus router.

pub mod foodbook_proxy;
pub mod product_sheet;
pub mod auth_status;

use axum::{Router, routing::get};

use crate::foodbook_utils::foodbook_client::FoodbookClient;

pub fn router(client: FoodbookClient) -> Router {
    Router::new()
        .route("/_foodbook/{*path}", get(foodbook_proxy::foodbook_proxy))
        .route("/_product_sheet/{product_id}", get(product_sheet::product_sheet))
        .route("/_auth/status", get(auth_status::auth_status))
        .with_state(client)
}
