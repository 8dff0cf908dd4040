//! Request Extractors
//!
//! 包装 axum 的 Json / Query 提取器，提取失败时走 ApiError，
//! 保证所有错误响应都是 `{ok, errno, error}` 格式

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use super::error::ApiError;

/// JSON 请求体提取器
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// 查询参数提取器
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
