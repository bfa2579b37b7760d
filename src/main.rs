//! xhrtesting - HTTP test fixture server

use anyhow::Context;
use clap::Parser;

use xhrtesting::application::report_public_ip;
use xhrtesting::config::{load_config_with_args, print_config, CliArgs, LogConfig};
use xhrtesting::infrastructure::http::{AppState, FixtureSettings, HttpServer, ServerConfig};
use xhrtesting::infrastructure::tls::{load_rustls_config, locate_certificates};
use xhrtesting::infrastructure::{HttpPublicIpClient, HttpPublicIpClientConfig, SharedRng};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let config =
        load_config_with_args(&args).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("xhrtesting - HTTP test fixture server");
    print_config(&config);

    // 指定了 TLS 域名时证书必须存在，不回退到明文 HTTP
    let tls = match &config.tls.domain {
        Some(domain) => {
            let paths = locate_certificates(&config.tls.cert_root, domain)
                .inspect_err(|e| tracing::error!(error = %e, "Could not find cert/key files for TLS domain"))
                .context("Could not find cert,keyfiles from TLS Domain")?;
            tracing::info!(cert = %paths.cert.display(), key = %paths.key.display(), "TLS certificate located");
            Some(load_rustls_config(&paths).await?)
        }
        None => None,
    };

    // 公网 IP 仅用于提示，失败不影响启动
    if config.public_ip.enabled {
        let ip_config = HttpPublicIpClientConfig::new(&config.public_ip.url)
            .with_timeout(config.public_ip.timeout_secs);
        match HttpPublicIpClient::new(ip_config) {
            Ok(client) => {
                report_public_ip(&client).await;
            }
            Err(e) => tracing::warn!(error = %e, "Public IP client unavailable"),
        }
    }

    let state = AppState::new(
        SharedRng::from_entropy(),
        FixtureSettings::from(&config.fixtures),
    );

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        cors: config.middleware.cors,
        client_ip: config.middleware.client_ip,
    };

    let mut server = HttpServer::new(server_config, state);
    if let Some(tls) = tls {
        server = server.with_tls(tls);
    }

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},xhrtesting={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // 无法监听信号时继续运行，不主动退出
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
