//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TLS 配置
    #[serde(default)]
    pub tls: TlsConfig,

    /// 中间件开关
    #[serde(default)]
    pub middleware: MiddlewareConfig,

    /// 测试路由行为
    #[serde(default)]
    pub fixtures: FixturesConfig,

    /// 公网 IP 查询
    #[serde(default)]
    pub public_ip: PublicIpConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// TLS 配置
#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    /// Let's Encrypt 域名，设置后以 HTTPS 模式启动
    #[serde(default)]
    pub domain: Option<String>,

    /// 证书根目录
    #[serde(default = "default_cert_root")]
    pub cert_root: PathBuf,
}

fn default_cert_root() -> PathBuf {
    PathBuf::from("/etc/letsencrypt/live")
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            domain: None,
            cert_root: default_cert_root(),
        }
    }
}

/// 中间件开关
#[derive(Debug, Clone, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS 策略
    #[serde(default = "default_true")]
    pub cors: bool,

    /// 采信 CF-Connecting-IP 作为客户端地址
    #[serde(default = "default_true")]
    pub client_ip: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            cors: true,
            client_ip: true,
        }
    }
}

/// 测试路由行为
#[derive(Debug, Clone, Deserialize)]
pub struct FixturesConfig {
    /// `/cookie/random/{number}` 的数量上限
    #[serde(default = "default_max_cookies")]
    pub max_cookies: u64,

    /// `/` 重定向目标
    #[serde(default = "default_project_url")]
    pub project_url: String,
}

fn default_max_cookies() -> u64 {
    10_000
}

fn default_project_url() -> String {
    "https://github.com/7c/xhrtesting".to_string()
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            max_cookies: default_max_cookies(),
            project_url: default_project_url(),
        }
    }
}

/// 公网 IP 查询配置
#[derive(Debug, Clone, Deserialize)]
pub struct PublicIpConfig {
    /// 启动时是否查询
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// 回显服务 URL
    #[serde(default = "default_public_ip_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_public_ip_timeout")]
    pub timeout_secs: u64,
}

fn default_public_ip_url() -> String {
    "https://ip4.ip8.com".to_string()
}

fn default_public_ip_timeout() -> u64 {
    5
}

impl Default for PublicIpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_public_ip_url(),
            timeout_secs: default_public_ip_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
