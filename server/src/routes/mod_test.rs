use std::net::SocketAddr;

use axum::body::{Body, to_bytes};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;

use super::*;
use crate::config::{ServerConfig, UpstreamTimeouts};

fn state_for(upstream_url: String) -> AppState {
    AppState::new(ServerConfig {
        port: 0,
        upstream_url,
        proxy_prefix: "/api/v1".to_owned(),
        timeouts: UpstreamTimeouts { request_secs: 5, connect_secs: 2 },
    })
    .unwrap()
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    if uri.path().ends_with("/missing") {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "Course not found" }))).into_response();
    }
    let header = |name: axum::http::HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": header(AUTHORIZATION),
        "host": header(HOST),
        "body": body,
    }))
    .into_response()
}

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new().route("/api/v1/{*path}", any(echo));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================
// healthz
// =============================================================

#[tokio::test]
async fn healthz_reports_upstream() {
    let app = api_routes(state_for("http://upstream.test/api/v1".to_owned()));
    let resp = app
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["upstream"], "http://upstream.test/api/v1");
}

// =============================================================
// proxy
// =============================================================

#[tokio::test]
async fn proxy_forwards_method_path_query_body_and_auth() {
    let addr = spawn_upstream().await;
    let app = api_routes(state_for(format!("http://{addr}/api/v1")));

    let req = Request::post("/api/v1/lesson/progress?lessonId=l-1")
        .header(HOST, "localhost:3000")
        .header(AUTHORIZATION, "Bearer abc")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"watchedPercentage":50}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["method"], "POST");
    assert_eq!(body["uri"], "/api/v1/lesson/progress?lessonId=l-1");
    assert_eq!(body["authorization"], "Bearer abc");
    assert_eq!(body["host"], addr.to_string());
    assert_eq!(body["body"], r#"{"watchedPercentage":50}"#);
}

#[tokio::test]
async fn proxy_passes_upstream_errors_through() {
    let addr = spawn_upstream().await;
    let app = api_routes(state_for(format!("http://{addr}/api/v1")));

    let resp = app
        .oneshot(Request::get("/api/v1/course/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["message"], "Course not found");
}

#[tokio::test]
async fn proxy_maps_unreachable_upstream_to_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let app = api_routes(state_for(format!("http://{addr}/api/v1")));

    let resp = app
        .oneshot(Request::get("/api/v1/course").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(resp).await["message"], "upstream API unavailable");
}

#[tokio::test]
async fn paths_outside_the_prefix_are_not_proxied() {
    let app = api_routes(state_for("http://127.0.0.1:9/api/v1".to_owned()));
    let resp = app
        .oneshot(Request::get("/api/v10/course").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
