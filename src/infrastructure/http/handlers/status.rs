//! Status Handlers
//!
//! 固定状态码、重定向与未匹配路由

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::domain::fixture::{FixtureBody, StatusFixture};
use crate::infrastructure::http::error::{plain_error, ApiError};
use crate::infrastructure::http::state::AppState;

/// 重定向响应
///
/// 带 `Location`，并附一段指向目标的 HTML
pub fn redirect_response(status: StatusCode, location: &str) -> Response {
    let reason = status.canonical_reason().unwrap_or("Redirect");
    (
        status,
        [
            (header::LOCATION, location.to_string()),
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
        ],
        format!("<a href=\"{location}\">{reason}</a>.\n\n"),
    )
        .into_response()
}

/// 把固定响应表中的一条写成 HTTP 响应
pub fn fixture_response(fixture: &StatusFixture) -> Response {
    let status =
        StatusCode::from_u16(fixture.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = match fixture.body {
        FixtureBody::Empty => status.into_response(),
        FixtureBody::Text(text) => (status, text).into_response(),
        FixtureBody::Error(msg) => plain_error(status, msg),
        FixtureBody::Redirect(location) => redirect_response(status, location),
    };

    for (name, value) in fixture.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Skipping invalid fixture header"),
        }
    }

    response
}

/// `/status/*` 与 `/to/*`
pub async fn status_fixture(fixture: &'static StatusFixture) -> Response {
    fixture_response(fixture)
}

/// `/` - 永久重定向到项目主页
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    redirect_response(StatusCode::MOVED_PERMANENTLY, &state.fixtures.project_url)
}

/// 未匹配任何路由
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
