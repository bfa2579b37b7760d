//! Startup Use Cases
//!
//! 启动时的非关键步骤，失败只记日志

use super::ports::PublicIpPort;

/// 查询并记录公网 IP
///
/// 返回查到的地址；失败时记 warn 并返回 None，不会中断启动
pub async fn report_public_ip(resolver: &dyn PublicIpPort) -> Option<String> {
    match resolver.lookup().await {
        Ok(ip) => {
            tracing::info!(ip = %ip, "Your external IP is: {}", ip);
            Some(ip)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Public IP lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::PublicIpError;
    use async_trait::async_trait;

    struct FixedIp(&'static str);

    #[async_trait]
    impl PublicIpPort for FixedIp {
        async fn lookup(&self) -> Result<String, PublicIpError> {
            Ok(self.0.to_string())
        }
    }

    struct Unreachable;

    #[async_trait]
    impl PublicIpPort for Unreachable {
        async fn lookup(&self) -> Result<String, PublicIpError> {
            Err(PublicIpError::Timeout)
        }
    }

    #[tokio::test]
    async fn test_report_success() {
        let ip = report_public_ip(&FixedIp("198.51.100.7")).await;
        assert_eq!(ip.as_deref(), Some("198.51.100.7"));
    }

    #[tokio::test]
    async fn test_report_failure_is_not_fatal() {
        assert_eq!(report_public_ip(&Unreachable).await, None);
    }
}
