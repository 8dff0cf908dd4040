//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件 + 请求 span
//!
//! token 通过查询参数传递，所有写进日志的 URI 都先脱敏

use axum::{
    extract::Request,
    http::Uri,
    middleware::Next,
    response::Response,
};
use tracing::Span;

const TOKEN_PARAM: &str = "token";
const REDACTED: &str = "***";

/// 返回脱敏后的 path + query，`token` 参数值替换为 `***`
pub fn redacted_uri(uri: &Uri) -> String {
    let path = uri.path();
    let Some(query) = uri.query() else {
        return path.to_string();
    };

    let redacted: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key == TOKEN_PARAM => format!("{}={}", key, REDACTED),
            _ => pair.to_string(),
        })
        .collect();

    format!("{}?{}", path, redacted.join("&"))
}

/// TraceLayer 的请求 span，不记录原始 URI
pub fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %redacted_uri(request.uri()),
    )
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
/// 注意：业务错误在 ApiError::into_response() 中另有记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = redacted_uri(request.uri());

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
