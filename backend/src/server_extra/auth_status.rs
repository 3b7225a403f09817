use axum::{Json, extract::State, http::HeaderMap};

use crate::{auth::AuthStatus, foodbook_utils::foodbook_client::FoodbookClient};

pub async fn auth_status(State(client): State<FoodbookClient>, headers: HeaderMap) -> Json<AuthStatus> {
    Json(AuthStatus::from_headers(&headers, &client.config().session_cookie_name))
}
