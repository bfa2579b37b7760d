//! Long Body Handler
//!
//! `/long/body/{number}`：返回 `number` 个 `x`

use std::convert::Infallible;

use axum::{
    body::{Body, Bytes},
    extract::Path,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::stream;

use crate::domain::fixture::{parse_count, FillerChunks, ParamError};
use crate::infrastructure::http::error::ApiError;

pub async fn long_body(Path(number): Path<String>) -> Result<Response, ApiError> {
    let len = parse_count(&number).map_err(|e| match e {
        ParamError::NotAnInteger(_) => ApiError::bad_request("Bad Request"),
        ParamError::Negative(_) => ApiError::bad_request("Number must be non-negative"),
    })?;

    let chunks = FillerChunks::new(len).map(|chunk| Ok::<_, Infallible>(Bytes::from_static(chunk)));
    let body = Body::from_stream(stream::iter(chunks));

    let mut response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_LENGTH, HeaderValue::from(len));

    Ok(response)
}
