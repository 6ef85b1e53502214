use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tempfile::tempdir;
use tower::util::ServiceExt;

use mira_host::config::{LibrarySettings, ServerSettings, Settings};
use mira_host::web::{self, state::AppState};
use mira_host::windows::WindowRegistry;

fn make_app() -> Router {
    let settings = Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        library: LibrarySettings {
            roots: Vec::new(),
            shuffle: false,
        },
    };
    let state = Arc::new(AppState {
        settings,
        windows: WindowRegistry::new(),
    });
    web::build_router(state)
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value: Value = serde_json::from_slice(&bytes).expect("json");
    (status, value)
}

#[tokio::test]
async fn window_lifecycle_flow() {
    let app = make_app();

    let (status, opened) = send_json(
        &app,
        Method::POST,
        "/windows/open",
        Some(serde_json::json!({ "title": "Mira" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let first_id = opened["data"]["id"].as_str().expect("id").to_string();

    let (_, opened) = send_json(
        &app,
        Method::POST,
        "/windows/open",
        Some(serde_json::json!({ "title": "Mira 2" })),
    )
    .await;
    let second_id = opened["data"]["id"].as_str().expect("id").to_string();

    let (status, listed) = send_json(&app, Method::GET, "/windows/list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["count"], 2);
    // Most recently opened first, and it holds focus.
    assert_eq!(listed["data"][0]["id"], second_id.as_str());
    assert_eq!(listed["data"][0]["focused"], true);
    assert_eq!(listed["data"][1]["focused"], false);

    let (status, _) = send_json(
        &app,
        Method::POST,
        &format!("/windows/{}/close", second_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = send_json(&app, Method::GET, "/windows/list", None).await;
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["data"][0]["id"], first_id.as_str());
    assert_eq!(listed["data"][0]["focused"], true);
}

#[tokio::test]
async fn fullscreen_toggle_round_trip() {
    let app = make_app();

    let (_, opened) = send_json(
        &app,
        Method::POST,
        "/windows/open",
        Some(serde_json::json!({})),
    )
    .await;
    let id = opened["data"]["id"].as_str().expect("id").to_string();

    let (status, payload) = send_json(
        &app,
        Method::POST,
        &format!("/windows/{}/fullscreen", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["fullscreen"], true);

    let (_, payload) = send_json(
        &app,
        Method::POST,
        &format!("/windows/{}/fullscreen", id),
        None,
    )
    .await;
    assert_eq!(payload["fullscreen"], false);
}

#[tokio::test]
async fn unknown_window_id_is_not_found() {
    let app = make_app();
    let bogus = uuid::Uuid::new_v4();

    let (status, payload) = send_json(
        &app,
        Method::POST,
        &format!("/windows/{}/close", bogus),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(payload["status"], "error");
}

#[tokio::test]
async fn shell_delete_removes_file_and_swallows_repeat() {
    let app = make_app();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("unwanted.png");
    std::fs::write(&path, b"x").expect("write");

    let (status, payload) = send_json(
        &app,
        Method::POST,
        "/shell/delete",
        Some(serde_json::json!({ "path": path })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["deleted"], true);
    assert!(!path.exists());

    // Deleting again must not error out the host.
    let (status, payload) = send_json(
        &app,
        Method::POST,
        "/shell/delete",
        Some(serde_json::json!({ "path": path })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["deleted"], false);
}

#[tokio::test]
async fn health_route_returns_ok() {
    let app = make_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
