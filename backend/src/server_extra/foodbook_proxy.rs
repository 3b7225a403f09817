//! Generic reverse proxy to the Foodbook API.

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{HeaderValue, StatusCode, header::{CONTENT_DISPOSITION, CONTENT_TYPE}},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::foodbook_utils::foodbook_client::FoodbookClient;

pub async fn foodbook_proxy(
    State(client): State<FoodbookClient>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    if !is_forwardable_path(&path) {
        warn!("Rejecting proxy path: {path:?}");
        return (StatusCode::BAD_REQUEST, "Invalid path").into_response();
    }
    info!("Proxying: {path}");
    forward(&client, &path, query.as_deref()).await
}

/// Relative API path without parent segments or an embedded scheme.
pub fn is_forwardable_path(path: &str) -> bool {
    !path.is_empty()
        && !path.contains("://")
        && !path.contains('\\')
        && path.split('/').all(|segment| segment != "..")
}

pub(crate) async fn forward(client: &FoodbookClient, path: &str, query: Option<&str>) -> Response {
    let upstream = match client.forward_get(path, query).await {
        Ok(upstream) => upstream,
        Err(e) => {
            warn!("Upstream request for {path} failed: {e}");
            return (StatusCode::BAD_GATEWAY, "Upstream unavailable").into_response();
        }
    };
    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = header_string(&upstream, reqwest::header::CONTENT_TYPE);
    let content_disposition = header_string(&upstream, reqwest::header::CONTENT_DISPOSITION);
    let body: Bytes = match upstream.bytes().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Reading upstream body for {path} failed: {e}");
            return (StatusCode::BAD_GATEWAY, "Upstream unavailable").into_response();
        }
    };

    let mut response = (status, body).into_response();
    for (name, value) in [(CONTENT_TYPE, content_type), (CONTENT_DISPOSITION, content_disposition)] {
        if let Some(value) = value.and_then(|v| HeaderValue::from_str(&v).ok()) {
            response.headers_mut().insert(name, value);
        }
    }
    response
}

fn header_string(response: &reqwest::Response, name: reqwest::header::HeaderName) -> Option<String> {
    response.headers().get(name).and_then(|v| v.to_str().ok()).map(|v| v.to_string())
}
