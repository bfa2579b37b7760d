//! xhrtesting - HTTP 客户端测试用服务器
//!
//! 一组按固定规则或随机返回状态码、响应头、Cookie、重定向和 JSON 的端点，
//! 用来测试 HTTP 客户端库（超时、重定向、Cookie、CORS、大响应体）。
//!
//! 领域层 (domain/):
//! - Fixture Context: 固定响应表、随机负载、随机 Cookie、填充响应体
//!
//! 应用层 (application/):
//! - Ports: 公网 IP 查询
//! - Startup: 启动时的非关键步骤
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 路由表、处理器、中间件（客户端 IP、访问日志、CORS）
//! - Adapters: 公网 IP HTTP 客户端
//! - Random: 进程级共享随机数源
//! - TLS: Let's Encrypt 证书查找

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
