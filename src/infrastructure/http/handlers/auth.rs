//! Auth Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{LoginCommand, RegisterCommand, UpgradeCommand};
use crate::infrastructure::http::dto::{
    AuthResponseDto, LoginRequest, MessageResponse, RegisterRequest, TokenQuery,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiQuery};
use crate::infrastructure::http::state::AppState;

const UPGRADE_MESSAGE: &str = "Welcome to Premium! 👑";

/// 注册
pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponseDto>, ApiError> {
    let cmd = RegisterCommand {
        email: req.email,
        password: req.password,
        name: req.name,
    };

    let result = state.register_handler.handle(cmd).await?;

    Ok(Json(AuthResponseDto {
        ok: true,
        token: result.token,
        user: result.user.into(),
    }))
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponseDto>, ApiError> {
    let cmd = LoginCommand {
        email: req.email,
        password: req.password,
    };

    let result = state.login_handler.handle(cmd).await?;

    Ok(Json(AuthResponseDto {
        ok: true,
        token: result.token,
        user: result.user.into(),
    }))
}

/// 升级 Premium
pub async fn upgrade(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<TokenQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .upgrade_handler
        .handle(UpgradeCommand { token: query.token })
        .await?;

    Ok(Json(MessageResponse::ok(UPGRADE_MESSAGE)))
}
