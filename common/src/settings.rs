//! 解析設定（CLI/WASM共通）

use crate::mime::MimePolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 模擬解析の待ち時間 [ms]
pub const DEFAULT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisSettings {
    pub delay_ms: u64,
    pub mime_policy: MimePolicy,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            mime_policy: MimePolicy::Trust,
        }
    }
}

impl AnalysisSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
