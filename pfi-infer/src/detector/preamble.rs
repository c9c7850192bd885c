//! 前导码检测

use pfi_core::{FieldLabel, Frame};
use tracing::{debug, info};

use crate::vote::most_frequent;

/// 前导码检测器
///
/// 每帧给出自己的前导码长度估计，取众数作为协议的前导码长度。
#[derive(Debug, Clone, Copy, Default)]
pub struct PreambleDetector;

impl PreambleDetector {
    pub fn new() -> Self {
        Self
    }

    /// 有效估计的众数；无有效估计时返回 `None`
    ///
    /// 小于1的估计视为无效。次数相同时取最先出现的值。
    pub fn preamble_end<F: Frame>(&self, frames: &[F]) -> Option<usize> {
        let estimates = frames
            .iter()
            .filter_map(|frame| frame.find_preamble_end())
            .filter(|&end| end >= 1);

        let (preamble_end, votes) = most_frequent(estimates)?;
        debug!(preamble_end, votes, frames = frames.len(), "preamble length voted");
        Some(preamble_end)
    }

    /// 检测前导码并生成 `Preamble` 标签，覆盖 `[0, preamble_end - 1]`
    pub fn detect<F: Frame>(&self, frames: &[F]) -> Option<FieldLabel> {
        let preamble_end = self.preamble_end(frames)?;
        info!(preamble_end, "preamble detected");
        Some(Self::label(preamble_end))
    }

    /// 给定前导码长度的标签
    fn label(preamble_end: usize) -> FieldLabel {
        FieldLabel::new("Preamble", 0, preamble_end.saturating_sub(1))
    }
}
