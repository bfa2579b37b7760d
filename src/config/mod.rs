//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 命令行参数（最高优先级）
//! - 环境变量
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）

mod cli;
mod loader;
mod types;

pub use cli::{split_listen_addr, CliArgs};
pub use loader::{load_config, load_config_from_path, load_config_with_args, print_config, ConfigError};
pub use types::{
    AppConfig, FixturesConfig, LogConfig, MiddlewareConfig, PublicIpConfig, ServerConfig,
    TlsConfig,
};
