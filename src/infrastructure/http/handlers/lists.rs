//! Wishlist / Favorites Handlers
//!
//! 两份清单共用同一组实现，路由层按 ListKind 区分

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{AddToListCommand, GetList, RemoveFromListCommand};
use crate::domain::collection::ListKind;
use crate::infrastructure::http::dto::{
    ItemsResponse, ListActionRequest, MessageResponse, TokenQuery,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiQuery};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// 通用实现
// ============================================================================

async fn get_list(
    state: &AppState,
    kind: ListKind,
    token: Option<String>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let items = state.get_list_handler.handle(GetList { token, kind }).await?;
    Ok(Json(ItemsResponse { items }))
}

async fn add_to_list(
    state: &AppState,
    kind: ListKind,
    token: Option<String>,
    req: ListActionRequest,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = AddToListCommand {
        token,
        kind,
        product_id: req.product_id,
    };
    let result = state.add_to_list_handler.handle(cmd).await?;
    Ok(Json(MessageResponse::ok(result.kind.added_message())))
}

async fn remove_from_list(
    state: &AppState,
    kind: ListKind,
    token: Option<String>,
    req: ListActionRequest,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = RemoveFromListCommand {
        token,
        kind,
        product_id: req.product_id,
    };
    let result = state.remove_from_list_handler.handle(cmd).await?;
    Ok(Json(MessageResponse::ok(result.kind.removed_message())))
}

// ============================================================================
// Wishlist
// ============================================================================

pub async fn get_wishlist(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<TokenQuery>,
) -> Result<Json<ItemsResponse>, ApiError> {
    get_list(&state, ListKind::Wishlist, query.token).await
}

pub async fn add_to_wishlist(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<TokenQuery>,
    ApiJson(req): ApiJson<ListActionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    add_to_list(&state, ListKind::Wishlist, query.token, req).await
}

pub async fn remove_from_wishlist(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<TokenQuery>,
    ApiJson(req): ApiJson<ListActionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    remove_from_list(&state, ListKind::Wishlist, query.token, req).await
}

// ============================================================================
// Favorites
// ============================================================================

pub async fn get_favorites(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<TokenQuery>,
) -> Result<Json<ItemsResponse>, ApiError> {
    get_list(&state, ListKind::Favorites, query.token).await
}

pub async fn add_to_favorites(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<TokenQuery>,
    ApiJson(req): ApiJson<ListActionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    add_to_list(&state, ListKind::Favorites, query.token, req).await
}

pub async fn remove_from_favorites(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<TokenQuery>,
    ApiJson(req): ApiJson<ListActionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    remove_from_list(&state, ListKind::Favorites, query.token, req).await
}
