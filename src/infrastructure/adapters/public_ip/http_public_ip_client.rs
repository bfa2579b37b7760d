//! HTTP Public IP Client - 调用外部 IP 回显服务
//!
//! 实现 PublicIpPort trait
//!
//! 外部 API:
//! GET https://ip4.ip8.com
//! Response: 纯文本 IPv4 地址

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{PublicIpError, PublicIpPort};

/// 公网 IP 客户端配置
#[derive(Debug, Clone)]
pub struct HttpPublicIpClientConfig {
    /// 回显服务 URL
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpPublicIpClientConfig {
    fn default() -> Self {
        Self {
            url: "https://ip4.ip8.com".to_string(),
            timeout_secs: 5,
        }
    }
}

impl HttpPublicIpClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// 公网 IP 客户端
pub struct HttpPublicIpClient {
    client: Client,
    config: HttpPublicIpClientConfig,
}

impl HttpPublicIpClient {
    pub fn new(config: HttpPublicIpClientConfig) -> Result<Self, PublicIpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PublicIpError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PublicIpPort for HttpPublicIpClient {
    async fn lookup(&self) -> Result<String, PublicIpError> {
        tracing::debug!(url = %self.config.url, "Looking up public IP");

        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PublicIpError::Timeout
                } else if e.is_connect() {
                    PublicIpError::NetworkError(format!("Cannot connect to IP service: {}", e))
                } else {
                    PublicIpError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(PublicIpError::ServiceError(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PublicIpError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        let ip = body.trim();
        if ip.is_empty() {
            return Err(PublicIpError::InvalidResponse("empty body".to_string()));
        }

        Ok(ip.to_string())
    }
}
