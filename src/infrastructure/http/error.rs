//! HTTP Error Handling

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 统一错误响应格式
///
/// errno 与 HTTP 状态码一致
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub errno: u16,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            errno: status.as_u16(),
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Conflict(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Unauthorized");
                msg
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Resource conflict");
                msg
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = status.as_u16(), error = %msg, "Internal server error");
                // 内部细节只进日志
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse::new(status, msg))).into_response()
    }
}

impl From<crate::application::ApplicationError> for ApiError {
    fn from(e: crate::application::ApplicationError) -> Self {
        match e {
            crate::application::ApplicationError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            crate::application::ApplicationError::Conflict(msg) => ApiError::Conflict(msg),
            crate::application::ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            crate::application::ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
