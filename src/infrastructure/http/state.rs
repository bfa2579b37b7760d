//! Application State
//!
//! 所有请求共享的只读设置与随机数源

use crate::config::FixturesConfig;
use crate::infrastructure::random::SharedRng;

/// 路由行为设置
#[derive(Debug, Clone)]
pub struct FixtureSettings {
    /// `/cookie/random/{number}` 允许的最大数量
    pub max_cookies: u64,
    /// `/` 永久重定向的目标
    pub project_url: String,
}

impl From<&FixturesConfig> for FixtureSettings {
    fn from(config: &FixturesConfig) -> Self {
        Self {
            max_cookies: config.max_cookies,
            project_url: config.project_url.clone(),
        }
    }
}

/// 默认值取自 [`FixturesConfig`]
impl Default for FixtureSettings {
    fn default() -> Self {
        Self::from(&FixturesConfig::default())
    }
}

/// 应用状态
#[derive(Debug, Default)]
pub struct AppState {
    pub rng: SharedRng,
    pub fixtures: FixtureSettings,
}

impl AppState {
    pub fn new(rng: SharedRng, fixtures: FixtureSettings) -> Self {
        Self { rng, fixtures }
    }
}
