//! HTTP Error Handling
//!
//! 错误响应统一为纯文本：消息 + 换行，`text/plain; charset=utf-8`，
//! 并带 `X-Content-Type-Options: nosniff`

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::domain::fixture::status::NOT_FOUND_TEXT;

/// 纯文本错误响应
pub fn plain_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
        format!("{message}\n"),
    )
        .into_response()
}

/// API 错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 客户端参数错误（路径参数非法等）
    BadRequest(String),
    /// 未匹配任何路由
    NotFound,
    /// 服务端内部错误
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // 客户端输入错误，不算服务端故障
            ApiError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Bad request");
                plain_error(StatusCode::BAD_REQUEST, &msg)
            }
            ApiError::NotFound => plain_error(StatusCode::NOT_FOUND, NOT_FOUND_TEXT),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                plain_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}
