//! HTTP Layer - 测试用 HTTP 端点

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::ClientAddr;
pub use routes::{create_routes, route_table, RouteEntry};
pub use server::{build_router, HttpServer, ServerConfig};
pub use state::{AppState, FixtureSettings};
