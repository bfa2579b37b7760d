//! HTTP Server
//!
//! Axum HTTP/HTTPS 服务器启动和配置

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::{access_log_middleware, client_ip_middleware, cors_layer};
use super::routes::{create_routes, route_table};
use super::state::AppState;

/// HTTPS 模式下优雅关闭的最长等待时间
const TLS_SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 是否启用 CORS 中间件
    pub cors: bool,
    /// 是否启用 CF-Connecting-IP 重映射
    pub client_ip: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors: true,
            client_ip: true,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建带中间件的 Router
///
/// 请求依次经过：Trace → 客户端 IP → 访问日志 → CORS → 路由
pub fn build_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
    with_middleware(create_routes().with_state(state), config)
}

/// 按配置给任意 Router 套上中间件栈
fn with_middleware(mut router: Router, config: &ServerConfig) -> Router {
    if config.cors {
        router = router.layer(cors_layer());
    }
    router = router.layer(middleware::from_fn(access_log_middleware));
    if config.client_ip {
        router = router.layer(middleware::from_fn(client_ip_middleware));
    }

    router.layer(TraceLayer::new_for_http())
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
    tls: Option<RustlsConfig>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
            tls: None,
        }
    }

    /// 启用 HTTPS
    pub fn with_tls(mut self, tls: RustlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }

    fn build_router(&self) -> Router {
        for route in route_table() {
            tracing::debug!(method = route.method_name(), path = route.path, "Route registered");
        }
        info!(
            cors = self.config.cors,
            client_ip = self.config.client_ip,
            "Middleware configured"
        );

        build_router(&self.config, self.state.clone())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.addr();

        match self.tls.clone() {
            Some(tls) => {
                let socket_addr = resolve_addr(&addr).await?;
                info!("HTTPS Mode");
                info!("Listening on https://{}", addr);
                self.serve_tls(socket_addr, tls, shutdown_signal).await
            }
            None => {
                info!("HTTP Mode");
                info!("Listening on http://{}", addr);
                let listener = TcpListener::bind(&addr).await?;
                self.serve(listener, shutdown_signal).await
            }
        }
    }

    /// 在已绑定的监听器上提供明文 HTTP 服务
    pub async fn serve<F>(self, listener: TcpListener, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal)
        .await
    }

    async fn serve_tls<F>(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        shutdown_signal: F,
    ) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let handle = axum_server::Handle::new();

        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            shutdown_signal.await;
            shutdown_handle.graceful_shutdown(Some(TLS_SHUTDOWN_GRACE));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(router.into_make_service_with_connect_info::<SocketAddr>())
            .await
    }
}

async fn resolve_addr(addr: &str) -> Result<SocketAddr, std::io::Error> {
    tokio::net::lookup_host(addr).await?.next().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::AddrNotAvailable,
            format!("Cannot resolve listen address: {}", addr),
        )
    })
}
