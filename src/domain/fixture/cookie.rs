//! Random Cookies
//!
//! `/cookie/random` 系列路由下发的随机 Cookie

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// 单 Cookie 路由使用的名称
pub const COOKIE_NAME: &str = "Random-Cookie";

/// Cookie 值上限（不含）
pub const COOKIE_VALUE_CEILING: u32 = 1_000_000;

/// Cookie 有效期（小时）
pub const COOKIE_TTL_HOURS: i64 = 24;

/// Cookie 路径
pub const COOKIE_PATH: &str = "/";

/// 随机 Cookie
///
/// 每次请求现生成，服务端不保存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomCookie {
    pub name: String,
    pub value: u32,
    pub expires: DateTime<Utc>,
}

impl RandomCookie {
    /// 生成一个随机值 Cookie，过期时间为 `now + 24h`
    pub fn generate<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            value: rng.gen_range(0..COOKIE_VALUE_CEILING),
            expires: now + Duration::hours(COOKIE_TTL_HOURS),
        }
    }

    /// `Set-Cookie` 头的值
    ///
    /// 过期时间使用 IMF-fixdate 格式（RFC 7231）
    pub fn header_value(&self) -> String {
        format!(
            "{}={}; Path={}; Expires={}",
            self.name,
            self.value,
            COOKIE_PATH,
            self.expires.format("%a, %d %b %Y %H:%M:%S GMT")
        )
    }
}

/// 生成 `Random-Cookie-1..=count`，每个取独立随机值
pub fn numbered_cookies<R: Rng + ?Sized>(
    count: u64,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<RandomCookie> {
    (1..=count)
        .map(|i| RandomCookie::generate(format!("{COOKIE_NAME}-{i}"), rng, now))
        .collect()
}
