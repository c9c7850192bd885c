//! 标签分配器
//!
//! 推断引擎入口：持有一组不可变的帧，按需检测前导码、全局常量和同步字。
//! 常量区间表只构建一次，随前导码长度变化或显式失效而重建。

use pfi_core::{FieldLabel, Frame, InferenceConfig, InferenceError};
use tracing::warn;

use crate::cancel::CancelToken;
use crate::constant::{ConstantAggregator, ConstantCache, ConstantTable, PairwiseConstantScanner};
use crate::detector::{PreambleDetector, SyncDetector};

/// 标签分配器
pub struct LabelAssigner<F> {
    frames: Vec<F>,
    config: InferenceConfig,
    /// 前导码长度，0 表示尚未检测或未检测到
    preamble_end: usize,
    cache: ConstantCache,
    cancel: CancelToken,
}

impl<F: Frame + Sync> LabelAssigner<F> {
    /// 使用默认配置创建
    pub fn new(frames: Vec<F>) -> Self {
        Self::with_config(frames, InferenceConfig::default())
    }

    pub fn with_config(frames: Vec<F>, config: InferenceConfig) -> Self {
        Self {
            frames,
            config,
            preamble_end: 0,
            cache: ConstantCache::new(),
            cancel: CancelToken::new(),
        }
    }

    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub fn preamble_end(&self) -> usize {
        self.preamble_end
    }

    /// 取消令牌，可交给其他线程中止正在进行的扫描
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// 常量区间表已构建，或没有任何帧
    pub fn is_initialized(&self) -> bool {
        self.frames.is_empty() || self.cache.is_built()
    }

    /// 丢弃缓存的常量区间表
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// 检测前导码
    ///
    /// 检测成功时记录前导码长度，供后续检测使用
    pub fn find_preamble(&mut self) -> Option<FieldLabel> {
        let label = PreambleDetector::new().detect(&self.frames)?;
        // 标签覆盖 [0, preamble_end - 1]
        self.preamble_end = label.end + 1;
        Some(label)
    }

    /// 常量区间表，必要时构建
    pub fn constant_table(&mut self) -> Result<&ConstantTable, InferenceError> {
        if self.frames.is_empty() {
            return Err(InferenceError::NoFrames);
        }

        let preamble_end = self.preamble_end;
        let scanner =
            PairwiseConstantScanner::new(&self.config).with_cancel_token(self.cancel.clone());
        let frames = &self.frames;
        self.cache
            .get_or_try_build(preamble_end, || scanner.scan(frames, preamble_end))
    }

    /// 检测所有帧中都保持一致的常量字段
    pub fn find_constants(&mut self) -> Result<Vec<FieldLabel>, InferenceError> {
        let frame_count = self.frames.len();
        let table = self.constant_table()?;
        ConstantAggregator::new().find_global_constants(table, frame_count)
    }

    /// 检测同步字
    ///
    /// 尚未检测前导码时先检测前导码
    pub fn find_sync(&mut self) -> Result<Option<FieldLabel>, InferenceError> {
        self.require_pairs()?;
        if self.preamble_end == 0 && self.find_preamble().is_none() {
            warn!("no preamble estimate, searching sync from bit 0");
        }

        let preamble_end = self.preamble_end;
        let table = self.constant_table()?;
        Ok(SyncDetector::new().detect(table, preamble_end))
    }

    /// 依次检测前导码、常量、同步字
    pub fn find_all(&mut self) -> Result<Vec<FieldLabel>, InferenceError> {
        self.require_pairs()?;

        let mut labels = Vec::new();
        labels.extend(self.find_preamble());
        labels.extend(self.find_constants()?);
        labels.extend(self.find_sync()?);
        Ok(labels)
    }

    fn require_pairs(&self) -> Result<(), InferenceError> {
        match self.frames.len() {
            0 => Err(InferenceError::NoFrames),
            1 => Err(InferenceError::InsufficientFrames {
                required: 2,
                actual: 1,
            }),
            _ => Ok(()),
        }
    }
}
