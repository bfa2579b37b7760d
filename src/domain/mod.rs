//! Domain Layer - 领域层
//!
//! 只有一个上下文:
//! - Fixture Context: 各测试路由的响应内容（固定表、随机负载、Cookie、填充体）

pub mod fixture;

pub use fixture::{parse_count, ParamError, RandomCookie, RandomPayload, StatusFixture};
