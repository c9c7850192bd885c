//! 同步字检测
//!
//! 将所有帧对的一致区段按半字节对齐，在紧跟前导码的候选中投票

use pfi_core::{FieldLabel, Interval};
use tracing::{debug, info};

use crate::constant::ConstantTable;
use crate::vote::most_frequent;

/// 同步字检测器
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncDetector;

impl SyncDetector {
    pub fn new() -> Self {
        Self
    }

    /// 对齐后起点恰为 `preamble_end` 的候选区段（按帧对顺序、扫描顺序）
    ///
    /// 对齐后不足3位的区段去掉两端填充后为空，不参与投票。
    pub fn candidates(&self, table: &ConstantTable, preamble_end: usize) -> Vec<Interval> {
        table
            .iter()
            .flat_map(|(_, intervals)| intervals.iter())
            .filter_map(Interval::nibble_aligned)
            .filter(|aligned| aligned.start() == preamble_end && aligned.len() >= 3)
            .collect()
    }

    /// 出现次数最多的候选即为同步字；无候选时返回 `None`
    pub fn detect(&self, table: &ConstantTable, preamble_end: usize) -> Option<FieldLabel> {
        let (winner, votes) = most_frequent(self.candidates(table, preamble_end))?;
        debug!(aligned = %winner, votes, "sync candidate voted");

        // 去掉半字节对齐引入的两端各1位
        let label = FieldLabel::new("Sync", winner.start() + 1, winner.end() - 1);
        info!(start = label.start, end = label.end, "sync word detected");
        Some(label)
    }
}
