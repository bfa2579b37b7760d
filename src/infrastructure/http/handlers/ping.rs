//! Ping Handler
//!
//! 健康检查

/// Ping endpoint
pub async fn ping() -> &'static str {
    "pong"
}
