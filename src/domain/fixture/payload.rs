//! Random JSON Payload
//!
//! `/json/random` 的响应体

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 随机整数上限（不含）
pub const INT_CEILING: u32 = 100;

/// 随机字符串长度
pub const STRING_LEN: usize = 10;

/// 随机数组长度
pub const ARRAY_LEN: usize = 5;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 随机 JSON 负载
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RandomPayload {
    pub random_array: Vec<u32>,
    pub random_bool: bool,
    pub random_float: f64,
    pub random_int: u32,
    pub random_object: RandomObject,
    pub random_string: String,
}

/// 两个键的整数映射
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomObject {
    pub a: u32,
    pub b: u32,
}

impl RandomPayload {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            random_int: rng.gen_range(0..INT_CEILING),
            random_float: rng.gen::<f64>(),
            random_bool: rng.gen::<bool>(),
            random_string: random_string(rng, STRING_LEN),
            random_array: random_array(rng, ARRAY_LEN),
            random_object: RandomObject {
                a: rng.gen_range(0..INT_CEILING),
                b: rng.gen_range(0..INT_CEILING),
            },
        }
    }
}

/// 由大小写字母组成的随机字符串
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// `[0, 100)` 内的随机整数数组
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(0..INT_CEILING)).collect()
}
