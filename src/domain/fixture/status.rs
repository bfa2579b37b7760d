//! Status Fixtures
//!
//! `/status/{code}` 与重定向目标路由的固定响应表

/// 固定响应体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureBody {
    /// 无响应体（204 / 304）
    Empty,
    /// 普通文本
    Text(&'static str),
    /// 错误文本，写出时追加换行并带 nosniff
    Error(&'static str),
    /// 重定向到指定位置
    Redirect(&'static str),
}

/// 单条固定响应
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFixture {
    pub path: &'static str,
    pub status: u16,
    pub body: FixtureBody,
    pub headers: &'static [(&'static str, &'static str)],
}

impl StatusFixture {
    const fn new(path: &'static str, status: u16, body: FixtureBody) -> Self {
        Self {
            path,
            status,
            body,
            headers: &[],
        }
    }

    const fn with_headers(mut self, headers: &'static [(&'static str, &'static str)]) -> Self {
        self.headers = headers;
        self
    }
}

/// 401 附带的认证质询
pub const BASIC_CHALLENGE: (&str, &str) = ("WWW-Authenticate", "Basic realm=\"restricted area\"");

/// 未匹配路由与 `/status/404` 共用的响应体
pub const NOT_FOUND_TEXT: &str = "404 page not found";

/// 全部固定响应
///
/// `/status/301` 与 `/status/302` 走重定向，目标 `/to/301`、`/to/302` 返回 200
pub const STATUS_FIXTURES: &[StatusFixture] = &[
    StatusFixture::new("/to/301", 200, FixtureBody::Text("301")),
    StatusFixture::new("/to/302", 200, FixtureBody::Text("302")),
    StatusFixture::new("/status/200", 200, FixtureBody::Text("OK")),
    StatusFixture::new("/status/201", 201, FixtureBody::Text("Created")),
    StatusFixture::new("/status/204", 204, FixtureBody::Empty),
    StatusFixture::new("/status/301", 301, FixtureBody::Redirect("/to/301")),
    StatusFixture::new("/status/302", 302, FixtureBody::Redirect("/to/302")),
    StatusFixture::new("/status/304", 304, FixtureBody::Empty),
    StatusFixture::new("/status/400", 400, FixtureBody::Error("Bad Request")),
    StatusFixture::new("/status/401", 401, FixtureBody::Error("401 Unauthorized"))
        .with_headers(&[BASIC_CHALLENGE]),
    StatusFixture::new("/status/403", 403, FixtureBody::Error("Forbidden")),
    StatusFixture::new("/status/404", 404, FixtureBody::Error(NOT_FOUND_TEXT)),
    StatusFixture::new("/status/408", 408, FixtureBody::Error("Request Timeout")),
    StatusFixture::new("/status/500", 500, FixtureBody::Error("Internal Server Error")),
    StatusFixture::new("/status/501", 501, FixtureBody::Error("Not Implemented")),
    StatusFixture::new("/status/503", 503, FixtureBody::Error("Service Unavailable")),
];

/// 按路径查找固定响应
pub fn find_fixture(path: &str) -> Option<&'static StatusFixture> {
    STATUS_FIXTURES.iter().find(|f| f.path == path)
}
