//! Fixture Context
//!
//! 各路由响应内容的纯函数部分（与 HTTP 框架无关）

pub mod cookie;
pub mod filler;
pub mod params;
pub mod payload;
pub mod status;

pub use cookie::{numbered_cookies, RandomCookie, COOKIE_NAME, COOKIE_VALUE_CEILING};
pub use filler::{FillerChunks, FILLER_BYTE};
pub use params::{parse_count, ParamError};
pub use payload::{RandomObject, RandomPayload};
pub use status::{find_fixture, FixtureBody, StatusFixture, STATUS_FIXTURES};
