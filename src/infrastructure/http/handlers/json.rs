//! Random JSON Handler

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::domain::fixture::RandomPayload;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// `/json/random`
///
/// 与流式 JSON 编码器一致，响应体以换行结尾
pub async fn random_json(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let payload = state.rng.with(|rng| RandomPayload::generate(rng));

    let mut body = serde_json::to_vec(&payload)
        .map_err(|e| ApiError::Internal(format!("Failed to encode payload: {e}")))?;
    body.push(b'\n');

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
