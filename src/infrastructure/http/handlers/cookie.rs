//! Cookie Handlers
//!
//! - `/cookie/random`           一个随机 Cookie
//! - `/cookie/random/{number}`  `number` 个随机 Cookie

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::domain::fixture::{numbered_cookies, parse_count, RandomCookie, COOKIE_NAME};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

fn with_cookies(cookies: &[RandomCookie], body: String) -> Response {
    let mut response = body.into_response();
    for cookie in cookies {
        match HeaderValue::from_str(&cookie.header_value()) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(cookie = %cookie.name, error = %e, "Invalid cookie header"),
        }
    }
    response
}

pub async fn random_cookie(State(state): State<Arc<AppState>>) -> Response {
    let now = Utc::now();
    let cookie = state
        .rng
        .with(|rng| RandomCookie::generate(COOKIE_NAME, rng, now));

    with_cookies(&[cookie], "Random cookie set".to_string())
}

/// `/cookie/random/{number}`
///
/// 非整数或负数返回 400 `Invalid number of cookies`；
/// 超过 `fixtures.max_cookies`（默认 10 000）返回 400 `Too many cookies requested`
pub async fn random_cookies(
    State(state): State<Arc<AppState>>,
    Path(number): Path<String>,
) -> Result<Response, ApiError> {
    let count =
        parse_count(&number).map_err(|_| ApiError::bad_request("Invalid number of cookies"))?;

    if count > state.fixtures.max_cookies {
        return Err(ApiError::bad_request("Too many cookies requested"));
    }

    let now = Utc::now();
    let cookies = state.rng.with(|rng| numbered_cookies(count, rng, now));

    Ok(with_cookies(&cookies, format!("Set {} random cookies", count)))
}
