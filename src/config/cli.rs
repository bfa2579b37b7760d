//! Command-line Arguments
//!
//! 命令行参数优先级最高，覆盖环境变量与配置文件

use clap::Parser;
use std::path::PathBuf;

use super::loader::ConfigError;

/// 命令行参数
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "xhrtesting", version, about = "HTTP test fixture server")]
pub struct CliArgs {
    /// HTTP network address, e.g. `:8080` or `127.0.0.1:8080`
    #[arg(long)]
    pub addr: Option<String>,

    /// Let's Encrypt TLS domain; enables HTTPS mode
    #[arg(long = "tlsdomain")]
    pub tls_domain: Option<String>,

    /// Path to a configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// 拆分监听地址
///
/// 兼容 `:8080` 写法（省略主机即监听所有网卡），IPv6 需要方括号
pub fn split_listen_addr(addr: &str) -> Result<(String, u16), ConfigError> {
    let (host, port) = addr.rsplit_once(':').ok_or_else(|| {
        ConfigError::ValidationError(format!("Listen address must be host:port, got '{}'", addr))
    })?;

    let port: u16 = port
        .parse()
        .map_err(|_| ConfigError::ValidationError(format!("Invalid port in '{}'", addr)))?;

    let host = if host.is_empty() { "0.0.0.0" } else { host };

    Ok((host.to_string(), port))
}
