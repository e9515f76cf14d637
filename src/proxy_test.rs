use std::convert::Infallible;
use std::net::SocketAddr;

use axum::Router;
use axum::extract::RawQuery;
use axum::routing::{get, post};
use serde_json::json;

use super::*;
use crate::routes::api_routes;

/// Serve `router` on an ephemeral loopback port.
async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

/// Fake completion backend: streams two chunks, the second echoing the body.
fn fake_backend() -> Router {
    Router::new()
        .route(
            "/api/chat",
            post(|headers: HeaderMap, body: String| async move {
                let content_type = headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                let chunks = vec![
                    Ok::<_, Infallible>(Bytes::from_static(b"Hel")),
                    Ok(Bytes::from(format!("lo|{content_type}|{body}"))),
                ];
                Response::builder()
                    .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
                    .body(Body::from_stream(futures::stream::iter(chunks)))
                    .expect("response")
            }),
        )
        .route("/api/health", get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }))
        .route("/api/denied", post(|| async { (StatusCode::UNAUTHORIZED, "bad key") }))
}

async fn spawn_proxy_to(backend: SocketAddr) -> SocketAddr {
    spawn_server(api_routes(Some(AppState::new(format!("http://{backend}"))))).await
}

/// An address nothing is listening on.
async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    listener.local_addr().expect("local addr")
}

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_keeps_path() {
    let uri: Uri = "/api/chat".parse().unwrap();
    assert_eq!(upstream_url("http://localhost:8000", &uri), "http://localhost:8000/api/chat");
}

#[test]
fn upstream_url_keeps_query() {
    let uri: Uri = "/api/health?verbose=1&x=y".parse().unwrap();
    assert_eq!(upstream_url("https://b.example.test", &uri), "https://b.example.test/api/health?verbose=1&x=y");
}

#[test]
fn proxy_error_maps_to_bad_gateway() {
    let err = ProxyError::Response(Response::builder().status(1000).body(()).unwrap_err());
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// forward
// =============================================================================

#[tokio::test]
async fn forwards_json_body_and_streams_reply() {
    let backend = spawn_server(fake_backend()).await;
    let proxy = spawn_proxy_to(backend).await;

    let payload = json!({
        "developer_message": "sys",
        "user_message": "hi",
        "model": "gpt-4.1-mini",
        "api_key": "sk-test",
    });
    let resp = reqwest::Client::new()
        .post(format!("http://{proxy}/api/chat"))
        .json(&payload)
        .send()
        .await
        .expect("proxy request");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    let body = resp.text().await.expect("body");
    assert_eq!(body, format!("Hello|application/json|{payload}"));
}

#[tokio::test]
async fn forwards_query_string() {
    let backend = spawn_server(fake_backend()).await;
    let proxy = spawn_proxy_to(backend).await;

    let body = reqwest::get(format!("http://{proxy}/api/health?probe=1"))
        .await
        .expect("proxy request")
        .text()
        .await
        .expect("body");

    assert_eq!(body, "probe=1");
}

#[tokio::test]
async fn passes_through_error_status() {
    let backend = spawn_server(fake_backend()).await;
    let proxy = spawn_proxy_to(backend).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{proxy}/api/denied"))
        .send()
        .await
        .expect("proxy request");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.text().await.expect("body"), "bad key");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let proxy = spawn_proxy_to(closed_addr().await).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{proxy}/api/chat"))
        .body("{}")
        .send()
        .await
        .expect("proxy request");

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// probe_upstream
// =============================================================================

#[tokio::test]
async fn probe_reports_reachable_backend() {
    let backend = spawn_server(fake_backend()).await;
    assert!(probe_upstream(&reqwest::Client::new(), &format!("http://{backend}")).await);
}

#[tokio::test]
async fn probe_reports_unreachable_backend() {
    let target = format!("http://{}", closed_addr().await);
    assert!(!probe_upstream(&reqwest::Client::new(), &target).await);
}
