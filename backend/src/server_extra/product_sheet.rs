//! Product specification sheets, only for visitors with a session.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use common::{messages::Message, search_const::normalize_locale};
use serde::Deserialize;
use tracing::info;

use crate::{auth::AuthStatus, foodbook_utils::foodbook_client::FoodbookClient, server_extra::foodbook_proxy::forward};

#[derive(Debug, Deserialize, Default)]
pub struct ProductSheetParams {
    #[serde(default)]
    pub locale: Option<String>,
}

pub async fn product_sheet(
    State(client): State<FoodbookClient>,
    Path(product_id): Path<u64>,
    Query(params): Query<ProductSheetParams>,
    headers: HeaderMap,
) -> Response {
    let locale = normalize_locale(params.locale.as_deref().unwrap_or_default());
    let auth = AuthStatus::from_headers(&headers, &client.config().session_cookie_name);
    if !auth.is_authenticated {
        info!("Product sheet {product_id} requested without session");
        return (StatusCode::UNAUTHORIZED, Message::LoginRequired.text(locale)).into_response();
    }
    info!("Serving product sheet {product_id} ({locale})");
    let query = format!("locale={locale}");
    forward(&client, &format!("products/{product_id}/specsheet"), Some(&query)).await
}
