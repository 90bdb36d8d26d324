mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, empty_request, json_request};
use serde_json::json;
use storefront::db;
use storefront::lifecycle::UserSystem;
use tower::ServiceExt;

async fn app() -> (UserSystem, Router) {
    let pool = db::connect("sqlite::memory:").await.unwrap();
    let system = UserSystem::start(pool).await.unwrap();
    let router = system.router();
    (system, router)
}

async fn register(app: &Router, name: &str, email: &str) -> serde_json::Value {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/register",
            json!({ "name": name, "email": email }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

#[tokio::test]
async fn registered_user_can_be_fetched() {
    let (_system, app) = app().await;

    let body = register(&app, "Ada", "ada@x.com").await;
    assert_eq!(body["message"], "User registered");
    assert_eq!(
        body["user"],
        json!({ "id": 1, "name": "Ada", "email": "ada@x.com" })
    );

    let resp = app.clone().oneshot(empty_request("GET", "/users/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["name"], "Ada");

    let resp = app.oneshot(empty_request("GET", "/users")).await.unwrap();
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_user_is_404() {
    let (_system, app) = app().await;
    let resp = app.oneshot(empty_request("GET", "/users/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn duplicate_email_is_rejected_without_a_new_row() {
    let (_system, app) = app().await;
    register(&app, "Ada", "ada@x.com").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/register",
            json!({ "name": "Imposter", "email": "ada@x.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app.oneshot(empty_request("GET", "/users")).await.unwrap();
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn registration_requires_both_fields() {
    let (_system, app) = app().await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/register", json!({ "name": "Ada" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "email is required");

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/register",
            json!({ "name": "", "email": "a@x.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.oneshot(empty_request("GET", "/users")).await.unwrap();
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn malformed_json_is_400_with_error_field() {
    let (_system, app) = app().await;
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/register")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());
}

#[tokio::test]
async fn partial_update_keeps_absent_fields() {
    let (_system, app) = app().await;
    register(&app, "Ada", "ada@x.com").await;

    let resp = app
        .clone()
        .oneshot(json_request("PUT", "/users/1", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "User updated");
    assert_eq!(
        body["user"],
        json!({ "id": 1, "name": "Ada", "email": "ada@x.com" })
    );

    let resp = app
        .clone()
        .oneshot(json_request("PUT", "/users/1", json!({ "email": "ada@lovelace.org" })))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["user"]["name"], "Ada");
    assert_eq!(body["user"]["email"], "ada@lovelace.org");

    let resp = app
        .oneshot(json_request("PUT", "/users/9", json!({ "name": "Nobody" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_cannot_steal_an_email() {
    let (_system, app) = app().await;
    register(&app, "Ada", "ada@x.com").await;
    register(&app, "Grace", "grace@x.com").await;

    let resp = app
        .oneshot(json_request("PUT", "/users/2", json!({ "email": "ada@x.com" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn deleting_twice_reports_not_found() {
    let (_system, app) = app().await;
    register(&app, "Ada", "ada@x.com").await;

    let resp = app.clone().oneshot(empty_request("DELETE", "/users/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "message": "User deleted" }));

    let resp = app.clone().oneshot(empty_request("GET", "/users/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app.clone().oneshot(empty_request("DELETE", "/users/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Ids are never handed out twice.
    let body = register(&app, "Grace", "grace@x.com").await;
    assert_eq!(body["user"]["id"], 2);
}

#[tokio::test]
async fn users_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("users.db").display());

    let pool = db::connect(&url).await.unwrap();
    let system = UserSystem::start(pool).await.unwrap();
    register(&system.router(), "Ada", "ada@x.com").await;
    system.shutdown().await.unwrap();

    let pool = db::connect(&url).await.unwrap();
    let system = UserSystem::start(pool).await.unwrap();
    let resp = system
        .router()
        .oneshot(empty_request("GET", "/users/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["email"], "ada@x.com");
}

#[tokio::test]
async fn unparsable_id_is_a_json_400() {
    let (_system, app) = app().await;

    for (method, uri) in [
        ("GET", "/users/abc"),
        ("DELETE", "/users/abc"),
        ("GET", "/users/99999999999999999999"),
    ] {
        let resp = app.clone().oneshot(empty_request(method, uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(
            resp.headers()["content-type"],
            "application/json",
            "{method} {uri}"
        );
        assert!(body_json(resp).await["error"].is_string());
    }
}

#[tokio::test]
async fn update_without_a_body_changes_nothing() {
    let (_system, app) = app().await;
    register(&app, "Ada", "ada@x.com").await;

    let resp = app
        .clone()
        .oneshot(empty_request("PUT", "/users/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await["user"],
        json!({ "id": 1, "name": "Ada", "email": "ada@x.com" })
    );

    let resp = app
        .oneshot(empty_request("PUT", "/users/2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
