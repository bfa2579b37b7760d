//! Path Parameters
//!
//! 路由中 `{number}` 参数的解析规则

use thiserror::Error;

/// 路径参数错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("not an integer: {0}")]
    NotAnInteger(String),

    #[error("negative value: {0}")]
    Negative(i64),
}

/// 解析非负计数参数
///
/// 先按有符号整数解析（允许 `+5`、前导零），溢出视为非整数；
/// 负数单独报错，方便调用方给出不同的提示文案。
pub fn parse_count(raw: &str) -> Result<u64, ParamError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| ParamError::NotAnInteger(raw.to_string()))?;

    u64::try_from(value).map_err(|_| ParamError::Negative(value))
}
