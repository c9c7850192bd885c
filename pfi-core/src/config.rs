//! 推断配置

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::InferenceError;

/// 常量字段的最短比特数（不含），比它更长的一致区段才算常量
pub const SHORTEST_CONSTANT_IN_BITS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// 一致区段必须严格长于该值才被记录
    pub min_constant_len: usize,
    /// 是否并行扫描帧对
    pub parallel: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            min_constant_len: SHORTEST_CONSTANT_IN_BITS,
            parallel: false,
        }
    }
}

impl InferenceConfig {
    pub fn from_json_str(text: &str) -> Result<Self, InferenceError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_min_constant_len(mut self, min_constant_len: usize) -> Self {
        self.min_constant_len = min_constant_len;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
