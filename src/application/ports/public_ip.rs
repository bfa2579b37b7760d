//! Public IP Port - 公网 IP 查询抽象
//!
//! 启动时打印本机出口 IP，失败不影响服务启动

use async_trait::async_trait;
use thiserror::Error;

/// 公网 IP 查询错误
#[derive(Debug, Error)]
pub enum PublicIpError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Public IP Port
#[async_trait]
pub trait PublicIpPort: Send + Sync {
    /// 查询本机的公网 IPv4 地址
    async fn lookup(&self) -> Result<String, PublicIpError>;
}
