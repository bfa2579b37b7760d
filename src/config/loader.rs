//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 命令行参数
//! 2. 环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::cli::{split_listen_addr, CliArgs};
use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置（不带命令行覆盖）
///
/// # 环境变量示例
/// - `XHRTESTING_SERVER__HOST=127.0.0.1`
/// - `XHRTESTING_SERVER__PORT=9090`
/// - `XHRTESTING_TLS__DOMAIN=example.com`
/// - `XHRTESTING_MIDDLEWARE__CORS=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_with_args(&CliArgs::default())
}

/// 从指定路径加载配置
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_args(&CliArgs {
        config: config_path.map(Path::to_path_buf),
        ..Default::default()
    })
}

/// 加载配置并应用命令行覆盖
pub fn load_config_with_args(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("tls.cert_root", "/etc/letsencrypt/live")?
        .set_default("middleware.cors", true)?
        .set_default("middleware.client_ip", true)?
        .set_default("public_ip.enabled", true)?
        .set_default("public_ip.url", "https://ip4.ip8.com")?
        .set_default("public_ip.timeout_secs", 5)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = &args.config {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 前缀: XHRTESTING_，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix("XHRTESTING")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 命令行参数（最高优先级）
    if let Some(addr) = &args.addr {
        let (host, port) = split_listen_addr(addr)?;
        builder = builder
            .set_override("server.host", host)?
            .set_override("server.port", i64::from(port))?;
    }
    if let Some(domain) = &args.tls_domain {
        builder = builder.set_override("tls.domain", domain.as_str())?;
    }

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    normalize_config(&mut app_config);
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 空白的 TLS 域名等同于未设置（HTTP 模式）
fn normalize_config(config: &mut AppConfig) {
    if config
        .tls
        .domain
        .as_deref()
        .is_some_and(|d| d.trim().is_empty())
    {
        config.tls.domain = None;
    }
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.fixtures.max_cookies == 0 {
        return Err(ConfigError::ValidationError(
            "fixtures.max_cookies must be greater than 0".to_string(),
        ));
    }

    if config.public_ip.enabled && config.public_ip.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Public IP URL cannot be empty when lookup is enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    match &config.tls.domain {
        Some(domain) => tracing::info!("TLS Domain '{}' enabled", domain),
        None => tracing::info!("TLS: disabled"),
    }
    tracing::info!("CORS: {}", config.middleware.cors);
    tracing::info!("CF-Connecting-IP override: {}", config.middleware.client_ip);
    tracing::info!("Max cookies per request: {}", config.fixtures.max_cookies);
    if config.public_ip.enabled {
        tracing::info!("Public IP lookup: {}", config.public_ip.url);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_max_cookies() {
        let mut config = AppConfig::default();
        config.fixtures.max_cookies = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_allows_empty_url_when_lookup_disabled() {
        let mut config = AppConfig::default();
        config.public_ip.url = String::new();
        assert!(validate_config(&config).is_err());

        config.public_ip.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_blank_tls_domain_means_plain_http() {
        let mut config = AppConfig::default();
        config.tls.domain = Some("  ".to_string());
        normalize_config(&mut config);
        assert_eq!(config.tls.domain, None);
    }

    #[test]
    fn test_file_and_cli_overrides() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[fixtures]\nmax_cookies = 50\n"
        )
        .unwrap();

        let from_file = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(from_file.server.addr(), "127.0.0.1:9000");
        assert_eq!(from_file.fixtures.max_cookies, 50);

        let args = CliArgs {
            addr: Some(":7000".to_string()),
            tls_domain: Some("example.com".to_string()),
            config: Some(file.path().to_path_buf()),
        };
        let overridden = load_config_with_args(&args).unwrap();
        assert_eq!(overridden.server.addr(), "0.0.0.0:7000");
        assert_eq!(overridden.tls.domain.as_deref(), Some("example.com"));
        assert_eq!(overridden.fixtures.max_cookies, 50);
    }

    #[test]
    fn test_bad_cli_addr() {
        let args = CliArgs {
            addr: Some("no-port".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            load_config_with_args(&args),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
