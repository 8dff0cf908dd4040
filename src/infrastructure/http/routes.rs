//! HTTP Routes
//!
//! API Endpoints（token 一律通过 `?token=` 查询参数传递）:
//! - /auth/register       POST  注册并登录
//! - /auth/login          POST  登录
//! - /auth/upgrade        POST  升级 Premium
//! - /products            GET   商品目录（token 可选）
//! - /wishlist            GET   心愿单
//! - /wishlist/add        POST  加入心愿单
//! - /wishlist/remove     POST  移出心愿单
//! - /favorites           GET   收藏夹
//! - /favorites/add       POST  加入收藏夹
//! - /favorites/remove    POST  移出收藏夹
//! - /api/ping            GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/auth", auth_routes())
        .route("/products", get(handlers::list_products))
        .merge(wishlist_routes())
        .merge(favorites_routes())
        .route("/api/ping", get(handlers::ping))
}

/// Auth 路由
fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/upgrade", post(handlers::upgrade))
}

/// Wishlist 路由
fn wishlist_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wishlist", get(handlers::get_wishlist))
        .route("/wishlist/add", post(handlers::add_to_wishlist))
        .route("/wishlist/remove", post(handlers::remove_from_wishlist))
}

/// Favorites 路由
fn favorites_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/favorites", get(handlers::get_favorites))
        .route("/favorites/add", post(handlers::add_to_favorites))
        .route("/favorites/remove", post(handlers::remove_from_favorites))
}
