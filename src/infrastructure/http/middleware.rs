//! HTTP Middleware
//!
//! - 客户端 IP 重映射（CF-Connecting-IP）
//! - 访问日志
//! - CORS 策略

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

/// 代理写入的原始客户端 IP 头
pub const CLIENT_IP_HEADER: HeaderName = HeaderName::from_static("cf-connecting-ip");

/// CSRF token 请求头
pub const CSRF_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-csrf-token");

/// 预检结果缓存时间
pub const CORS_MAX_AGE: Duration = Duration::from_secs(300);

/// 请求记录的客户端地址
///
/// 由 [`client_ip_middleware`] 写入请求扩展
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub String);

/// 客户端 IP 重映射中间件
///
/// 请求带 `CF-Connecting-IP` 时直接采信该值作为客户端地址，否则使用传输层对端地址。
///
/// 注意：不校验格式，也不校验请求是否真的来自代理。
/// 任何客户端都可以通过该头伪造自己的地址，这是已知限制。
pub async fn client_ip_middleware(mut request: Request, next: Next) -> Response {
    let addr = resolve_client_addr(&request);
    request.extensions_mut().insert(ClientAddr(addr));
    next.run(request).await
}

/// 解析客户端地址：代理头优先，其次对端地址
pub fn resolve_client_addr(request: &Request) -> String {
    request
        .headers()
        .get(&CLIENT_IP_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| peer_addr(request))
}

fn peer_addr(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// 访问日志中间件
///
/// 每个请求一条记录。测试路由会故意返回 4xx/5xx，这里不按状态码升级日志级别
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let client = request
        .extensions()
        .get::<ClientAddr>()
        .map(|ClientAddr(addr)| addr.clone())
        .unwrap_or_else(|| peer_addr(&request));
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        target: "http_access",
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        client = %client,
        latency_ms = started.elapsed().as_millis() as u64,
        "{} {} {}",
        method,
        uri,
        response.status()
    );

    response
}

/// CORS 策略
///
/// 允许任意来源，不允许携带凭证，不额外暴露响应头
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE, CSRF_TOKEN_HEADER])
        .allow_credentials(false)
        .max_age(CORS_MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Extension, Router,
    };
    use tower::util::ServiceExt;

    async fn echo_client(Extension(ClientAddr(addr)): Extension<ClientAddr>) -> String {
        addr
    }

    async fn body_handler() -> &'static str {
        "body"
    }

    fn client_ip_router() -> Router {
        Router::new()
            .route("/whoami", get(echo_client))
            .layer(axum::middleware::from_fn(client_ip_middleware))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_header_overrides_peer_address() {
        let mut request = HttpRequest::builder()
            .uri("/whoami")
            .header("CF-Connecting-IP", "203.0.113.9")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 1], 4321))));

        let response = client_ip_router().oneshot(request).await.unwrap();
        assert_eq!(body_string(response).await, "203.0.113.9");
    }

    #[tokio::test]
    async fn test_header_value_is_not_validated() {
        let request = HttpRequest::builder()
            .uri("/whoami")
            .header("CF-Connecting-IP", "definitely-not-an-ip")
            .body(Body::empty())
            .unwrap();

        let response = client_ip_router().oneshot(request).await.unwrap();
        assert_eq!(body_string(response).await, "definitely-not-an-ip");
    }

    #[tokio::test]
    async fn test_falls_back_to_peer_address() {
        let mut request = HttpRequest::builder()
            .uri("/whoami")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 1], 4321))));

        let response = client_ip_router().oneshot(request).await.unwrap();
        assert_eq!(body_string(response).await, "10.0.0.1:4321");
    }

    #[tokio::test]
    async fn test_no_peer_address() {
        let request = HttpRequest::builder()
            .uri("/whoami")
            .body(Body::empty())
            .unwrap();

        let response = client_ip_router().oneshot(request).await.unwrap();
        assert_eq!(body_string(response).await, "unknown");
    }

    #[tokio::test]
    async fn test_access_log_passes_response_through() {
        let app = Router::new()
            .route("/ok", get(body_handler))
            .layer(axum::middleware::from_fn(access_log_middleware));
        let request = HttpRequest::builder()
            .uri("/ok")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "body");
    }

    #[tokio::test]
    async fn test_simple_request_gets_allow_origin() {
        let app = Router::new().route("/r", get(body_handler)).layer(cors_layer());
        let request = HttpRequest::builder()
            .uri("/r")
            .header("Origin", "https://client.example")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert!(response
            .headers()
            .get("access-control-allow-credentials")
            .is_none());
        assert!(response
            .headers()
            .get("access-control-expose-headers")
            .is_none());
        assert_eq!(body_string(response).await, "body");
    }

    #[tokio::test]
    async fn test_preflight_does_not_reach_handler() {
        let app = Router::new().route("/r", get(body_handler)).layer(cors_layer());
        let request = HttpRequest::builder()
            .method(Method::OPTIONS)
            .uri("/r")
            .header("Origin", "https://client.example")
            .header("Access-Control-Request-Method", "PUT")
            .header("Access-Control-Request-Headers", "x-csrf-token")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-max-age"], "300");

        let methods = headers["access-control-allow-methods"].to_str().unwrap();
        for m in ["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"] {
            assert!(methods.contains(m), "missing {m} in {methods}");
        }
        let allowed = headers["access-control-allow-headers"]
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        for h in ["accept", "authorization", "content-type", "x-csrf-token"] {
            assert!(allowed.contains(h), "missing {h} in {allowed}");
        }

        assert_eq!(body_string(response).await, "");
    }
}
