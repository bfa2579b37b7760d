//! HTTP Routes
//!
//! 路由表只在这里声明一次：(method, path, handler)
//!
//! 所有路由都接受任意方法（OPTIONS 预检由 CORS 层先行应答）
//!
//! Endpoints:
//! - /                        301 → 项目主页
//! - /ping                    pong
//! - /to/301, /to/302         重定向目标
//! - /status/{code}           固定状态码（见 STATUS_FIXTURES）
//! - /long/body/{number}      `number` 个 `x`
//! - /json/random             随机 JSON
//! - /cookie/random           一个随机 Cookie
//! - /cookie/random/{number}  `number` 个随机 Cookie

use std::sync::Arc;

use axum::{
    handler::Handler,
    http::Method,
    routing::{any, MethodRouter},
    Router,
};

use super::handlers;
use super::state::AppState;
use crate::domain::fixture::STATUS_FIXTURES;

/// 路由表中的一条
pub struct RouteEntry {
    /// `None` 表示不限方法
    pub method: Option<Method>,
    pub path: &'static str,
    pub router: MethodRouter<Arc<AppState>>,
}

impl RouteEntry {
    /// 日志里显示的方法名
    pub fn method_name(&self) -> &str {
        self.method.as_ref().map_or("ANY", Method::as_str)
    }
}

fn any_route<H, T>(path: &'static str, handler: H) -> RouteEntry
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    RouteEntry {
        method: None,
        path,
        router: any(handler),
    }
}

/// 完整路由表
pub fn route_table() -> Vec<RouteEntry> {
    let mut routes = vec![
        any_route("/", handlers::index),
        any_route("/ping", handlers::ping),
    ];

    routes.extend(
        STATUS_FIXTURES
            .iter()
            .map(|fixture| any_route(fixture.path, move || handlers::status_fixture(fixture))),
    );

    routes.extend([
        any_route("/long/body/:number", handlers::long_body),
        any_route("/json/random", handlers::random_json),
        any_route("/cookie/random", handlers::random_cookie),
        any_route("/cookie/random/:number", handlers::random_cookies),
    ]);

    routes
}

/// 由路由表构建 Router，未匹配的请求走 404
pub fn create_routes() -> Router<Arc<AppState>> {
    route_table()
        .into_iter()
        .fold(Router::new(), |router, entry| router.route(entry.path, entry.router))
        .fallback(handlers::not_found)
}
