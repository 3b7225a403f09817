use axum::http::StatusCode;
use backend::{config::FoodbookConfig, foodbook_utils::foodbook_client::FoodbookClient, server_extra::router};
use pretty_assertions::assert_eq;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn client_for(server: &MockServer) -> FoodbookClient {
    FoodbookClient::new(FoodbookConfig::new(format!("{}/api", server.uri()))).unwrap()
}

/// Serves the extra routes on a free local port and returns their base url.
async fn serve(client: FoodbookClient) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(client)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn get(client: FoodbookClient, uri: &str, cookie: Option<&str>) -> (StatusCode, Option<String>, String) {
    let base = serve(client).await;
    let mut request = reqwest::Client::new().get(format!("{base}{uri}"));
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }
    let response = request.send().await.unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let content_type = response.headers().get(CONTENT_TYPE).map(|v| v.to_str().unwrap().to_string());
    (status, content_type, response.text().await.unwrap())
}

#[tokio::test]
async fn proxy_forwards_path_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/webinars/upcoming"))
        .and(query_param("locale", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, content_type, body) = get(client_for(&server), "/_foodbook/webinars/upcoming?locale=en", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"[{"id":1}]"#);
}

#[tokio::test]
async fn proxy_passes_upstream_errors_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let (status, _, body) = get(client_for(&server), "/_foodbook/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "not here");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let client = FoodbookClient::new(FoodbookConfig::new("http://127.0.0.1:9/api")).unwrap();
    let (status, _, _) = get(client, "/_foodbook/webinars", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn product_sheet_requires_session_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/42/specsheet"))
        .and(query_param("locale", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"%PDF-1.7".to_vec(), "application/pdf"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, _, body) = get(client_for(&server), "/_product_sheet/42?locale=en", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Log in to view the product sheet");

    let (status, content_type, body) =
        get(client_for(&server), "/_product_sheet/42?locale=en", Some("foodbook_session=abc")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/pdf"));
    assert_eq!(body, "%PDF-1.7");
}

#[tokio::test]
async fn auth_status_reports_cookie_presence() {
    let server = MockServer::start().await;
    let (_, _, body) = get(client_for(&server), "/_auth/status", None).await;
    assert_eq!(body, r#"{"isAuthenticated":false}"#);

    let (_, _, body) = get(client_for(&server), "/_auth/status", Some("foodbook_session=abc")).await;
    assert_eq!(body, r#"{"isAuthenticated":true}"#);
}
