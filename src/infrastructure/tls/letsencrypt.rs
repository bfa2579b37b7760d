//! Let's Encrypt Certificates
//!
//! 按域名在本地查找 certbot 生成的证书与私钥

use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;

/// certbot 默认的证书根目录
pub const DEFAULT_CERT_ROOT: &str = "/etc/letsencrypt/live";

const CERT_FILE: &str = "fullchain.pem";
const KEY_FILE: &str = "privkey.pem";

/// TLS 错误
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("Certificate not found for domain '{domain}': {path}")]
    CertificateNotFound { domain: String, path: PathBuf },

    #[error("Private key not found for domain '{domain}': {path}")]
    PrivateKeyNotFound { domain: String, path: PathBuf },

    #[error("Failed to load TLS material: {0}")]
    LoadError(#[from] std::io::Error),
}

/// 证书文件对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificatePaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

impl CertificatePaths {
    /// 约定路径：`{root}/{小写域名}/fullchain.pem` 与 `privkey.pem`
    pub fn for_domain(root: &Path, domain: &str) -> Self {
        let dir = root.join(domain.to_lowercase());
        Self {
            cert: dir.join(CERT_FILE),
            key: dir.join(KEY_FILE),
        }
    }
}

/// 查找证书，任一文件缺失即报错
pub fn locate_certificates(root: &Path, domain: &str) -> Result<CertificatePaths, TlsError> {
    let paths = CertificatePaths::for_domain(root, domain);

    if !paths.cert.is_file() {
        return Err(TlsError::CertificateNotFound {
            domain: domain.to_string(),
            path: paths.cert,
        });
    }
    if !paths.key.is_file() {
        return Err(TlsError::PrivateKeyNotFound {
            domain: domain.to_string(),
            path: paths.key,
        });
    }

    Ok(paths)
}

/// 加载 rustls 配置
pub async fn load_rustls_config(paths: &CertificatePaths) -> Result<RustlsConfig, TlsError> {
    let config = RustlsConfig::from_pem_file(&paths.cert, &paths.key).await?;
    Ok(config)
}
