//! Infrastructure Layer - 基础设施层
//!
//! 提供 HTTP 服务、端口实现、随机数源与 TLS 证书加载

pub mod adapters;
pub mod http;
pub mod random;
pub mod tls;

pub use adapters::{HttpPublicIpClient, HttpPublicIpClientConfig};
pub use random::SharedRng;
