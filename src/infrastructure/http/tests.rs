//! 路由级测试：经由完整 Router（含中间件）驱动所有端点

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

use super::{AppState, HttpServer};
use crate::application::SessionPolicy;
use crate::config::ServerConfig;
use crate::infrastructure::adapters::{Argon2PasswordHasher, RandomTokenIssuer, StaticCatalog};
use crate::infrastructure::memory::{
    InMemoryListStore, InMemorySessionManager, InMemoryUserRepository,
};
use crate::infrastructure::seed::{seed_demo_account, DEMO_EMAIL, DEMO_PASSWORD};

fn build_app(with_demo: bool) -> Router {
    let users = Arc::new(InMemoryUserRepository::new());
    let lists = Arc::new(InMemoryListStore::new());
    let hasher = Arc::new(Argon2PasswordHasher::fast_for_tests());

    if with_demo {
        seed_demo_account(users.as_ref(), lists.as_ref(), hasher.as_ref()).unwrap();
    }

    let state = AppState::new(
        users,
        Arc::new(InMemorySessionManager::new()),
        lists,
        Arc::new(StaticCatalog::seeded()),
        hasher,
        Arc::new(RandomTokenIssuer::new()),
        SessionPolicy::never_expire(),
    );
    HttpServer::new(ServerConfig::default(), state).build_router()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/register",
        Some(json!({"email": email, "password": "pw", "name": "A"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

fn ids(items: &Value) -> Vec<u64> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_register_response_shape() {
    let app = build_app(false);
    let (status, body) = send(
        &app,
        "POST",
        "/auth/register",
        Some(json!({"email": "a@x.com", "password": "pw", "name": "A"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["token"].as_str().unwrap().len(), 64);
    assert_eq!(
        body["user"],
        json!({"name": "A", "email": "a@x.com", "is_premium": false})
    );
}

#[tokio::test]
async fn test_duplicate_register_is_conflict() {
    let app = build_app(false);
    register(&app, "a@x.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/register",
        Some(json!({"email": "a@x.com", "password": "other", "name": "B"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["ok"], false);
    assert_eq!(body["errno"], 409);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn test_login_flow() {
    let app = build_app(false);
    register(&app, "a@x.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        Some(json!({"email": "a@x.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        Some(json!({"email": "a@x.com", "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();

    let (status, body) = send(&app, "GET", &format!("/wishlist?token={}", token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_list_endpoints_require_token() {
    let app = build_app(false);

    for uri in ["/wishlist", "/favorites", "/wishlist?token=", "/favorites?token=nope"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["error"], "Not authenticated");
    }

    let (status, _) = send(&app, "POST", "/wishlist/add", Some(json!({"product_id": 1}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "POST", "/auth/upgrade?token=nope", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_products_lock_follows_premium_status() {
    let app = build_app(false);

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 10);
    for product in products {
        assert_eq!(product["locked"], product["premium_only"]);
    }

    // 锁定商品不做字段裁剪
    let gold = &products[6];
    assert_eq!(gold["id"], 7);
    assert_eq!(gold["name"], "Gold Reserve 510");
    assert_eq!(gold["price"], 49.99);
    assert_eq!(gold["category"], "Premium");
    assert_eq!(gold["image"], "https://picsum.photos/seed/gold7/400/300");
    assert_eq!(gold["description"], "24K gold contacts, lifetime warranty");

    let token = register(&app, "a@x.com").await;
    let (_, body) = send(&app, "GET", &format!("/products?token={}", token), None).await;
    let locked = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["locked"] == true)
        .count();
    assert_eq!(locked, 4);

    let (status, body) = send(&app, "POST", &format!("/auth/upgrade?token={}", token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true, "message": "Welcome to Premium! 👑"}));

    let (_, body) = send(&app, "GET", &format!("/products?token={}", token), None).await;
    assert!(body["products"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["locked"] == false));
}

#[tokio::test]
async fn test_locked_product_can_still_be_wishlisted() {
    let app = build_app(false);
    let token = register(&app, "a@x.com").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/wishlist/add?token={}", token),
        Some(json!({"product_id": 7})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true, "message": "Added to wishlist! 💫"}));

    let (_, body) = send(&app, "GET", &format!("/wishlist?token={}", token), None).await;
    assert_eq!(ids(&body["items"]), vec![7]);
    // 清单条目不带 locked 标记
    assert!(body["items"][0].get("locked").is_none());
}

#[tokio::test]
async fn test_wishlist_add_remove_idempotence() {
    let app = build_app(false);
    let token = register(&app, "a@x.com").await;
    let add = format!("/wishlist/add?token={}", token);
    let remove = format!("/wishlist/remove?token={}", token);
    let get = format!("/wishlist?token={}", token);

    send(&app, "POST", &add, Some(json!({"product_id": 5}))).await;
    send(&app, "POST", &add, Some(json!({"product_id": 2}))).await;
    send(&app, "POST", &add, Some(json!({"product_id": 5}))).await;

    let (_, body) = send(&app, "GET", &get, None).await;
    // 按目录顺序返回
    assert_eq!(ids(&body["items"]), vec![2, 5]);

    let (status, body) = send(&app, "POST", &remove, Some(json!({"product_id": 5}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Removed from wishlist");

    let (status, _) = send(&app, "POST", &remove, Some(json!({"product_id": 5}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", &get, None).await;
    assert_eq!(ids(&body["items"]), vec![2]);
}

#[tokio::test]
async fn test_favorites_mirror_wishlist() {
    let app = build_app(false);
    let token = register(&app, "a@x.com").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/favorites/add?token={}", token),
        Some(json!({"product_id": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Added to favorites! ⭐");

    let (_, favorites) = send(&app, "GET", &format!("/favorites?token={}", token), None).await;
    assert_eq!(ids(&favorites["items"]), vec![3]);

    let (_, wishlist) = send(&app, "GET", &format!("/wishlist?token={}", token), None).await;
    assert_eq!(ids(&wishlist["items"]), Vec::<u64>::new());

    let (_, body) = send(
        &app,
        "POST",
        &format!("/favorites/remove?token={}", token),
        Some(json!({"product_id": 3})),
    )
    .await;
    assert_eq!(body["message"], "Removed from favorites");
}

#[tokio::test]
async fn test_users_do_not_share_lists() {
    let app = build_app(false);
    let alice = register(&app, "alice@x.com").await;
    let bob = register(&app, "bob@x.com").await;

    send(
        &app,
        "POST",
        &format!("/wishlist/add?token={}", alice),
        Some(json!({"product_id": 1})),
    )
    .await;

    let (_, body) = send(&app, "GET", &format!("/wishlist?token={}", bob), None).await;
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_demo_account_login() {
    let app = build_app(true);
    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        Some(json!({"email": DEMO_EMAIL, "password": DEMO_PASSWORD})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["is_premium"], true);
    let token = body["token"].as_str().unwrap();

    let (_, wishlist) = send(&app, "GET", &format!("/wishlist?token={}", token), None).await;
    assert_eq!(ids(&wishlist["items"]), vec![1, 3, 5]);

    let (_, favorites) = send(&app, "GET", &format!("/favorites?token={}", token), None).await;
    assert_eq!(ids(&favorites["items"]), vec![2, 7]);
}

#[tokio::test]
async fn test_ping() {
    let app = build_app(false);
    register(&app, "a@x.com").await;

    let (status, body) = send(&app, "GET", "/api/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["products"], 10);
    assert_eq!(body["sessions"], 1);
}

#[tokio::test]
async fn test_any_integer_product_id_is_accepted() {
    let app = build_app(false);
    let token = register(&app, "a@x.com").await;

    for id in [-1i64, 0, 4_294_967_296] {
        let (status, body) = send(
            &app,
            "POST",
            &format!("/wishlist/add?token={}", token),
            Some(json!({ "product_id": id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", id);
        assert_eq!(body["ok"], true);
    }

    // 不在目录中的 ID 不出现在清单读取结果里
    let (_, body) = send(&app, "GET", &format!("/wishlist?token={}", token), None).await;
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_malformed_body_returns_json_error() {
    let app = build_app(false);
    let token = register(&app, "a@x.com").await;
    let uri = format!("/wishlist/add?token={}", token);

    for payload in [json!({"product_id": "7"}), json!({}), json!({"product_id": 1.5})] {
        let (status, body) = send(&app, "POST", &uri, Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body["ok"], false);
        assert_eq!(body["errno"], 400);
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    // 缺少 Content-Type
    let request = Request::builder()
        .method("POST")
        .uri(&uri)
        .body(Body::from(r#"{"product_id": 1}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["errno"], 400);

    // 非法 JSON
    let request = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
