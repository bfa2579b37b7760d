//! 应用层
//!
//! 包含：
//! - ports: 出站端口定义（公网 IP 查询）
//! - startup: 启动阶段的用例（公网 IP 报告）

pub mod ports;
pub mod startup;

pub use ports::{PublicIpError, PublicIpPort};
pub use startup::report_public_ip;
