//! Shared Random Source
//!
//! 进程级随机数生成器，所有请求共用

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// 共享随机数生成器
///
/// 启动时从系统熵源播种一次，之后不再重新播种。
/// 多个请求并发取数时由 Mutex 串行化。
#[derive(Debug)]
pub struct SharedRng {
    inner: Mutex<StdRng>,
}

impl SharedRng {
    /// 从系统熵源创建
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// 使用固定种子创建（测试用）
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            inner: Mutex::new(rng),
        }
    }

    /// 持锁期间借出生成器
    ///
    /// 闭包内不要 await；锁中毒时沿用内部状态
    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *guard)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
