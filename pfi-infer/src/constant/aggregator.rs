//! 全局常量聚合器
//!
//! 以帧0与帧1的一致区段为种子，逐帧与帧0的比较结果求交，
//! 留下在所有帧中都保持一致的区段。
//! 某个常量若不出现在帧0与帧1的比较中，则不可能被发现。

use pfi_core::{FieldLabel, InferenceError, Interval};
use tracing::{debug, info};

use super::table::ConstantTable;

/// 全局常量聚合器
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantAggregator;

impl ConstantAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 求全局常量区段，按接受顺序返回
    pub fn find_global_intervals(
        &self,
        table: &ConstantTable,
        frame_count: usize,
    ) -> Result<Vec<Interval>, InferenceError> {
        if frame_count < 2 {
            return Err(InferenceError::InsufficientFrames {
                required: 2,
                actual: frame_count,
            });
        }

        let mut accepted: Vec<Interval> = Vec::new();

        'seeds: for seed in table.intervals(0, 1)? {
            let mut candidate = *seed;

            for j in 2..frame_count {
                let best = table
                    .intervals(0, j)?
                    .iter()
                    .filter_map(|other| candidate.find_common_interval(other))
                    .max();

                match best {
                    Some(common) => candidate = common,
                    None => {
                        debug!(seed = %seed, frame = j, "candidate dropped");
                        continue 'seeds;
                    }
                }
            }

            Self::merge(&mut accepted, candidate);
        }

        info!(count = accepted.len(), "global constants found");
        Ok(accepted)
    }

    /// 求全局常量并生成标签 `Constant #k`
    pub fn find_global_constants(
        &self,
        table: &ConstantTable,
        frame_count: usize,
    ) -> Result<Vec<FieldLabel>, InferenceError> {
        Ok(self
            .find_global_intervals(table, frame_count)?
            .into_iter()
            .enumerate()
            .map(|(i, interval)| FieldLabel::from_interval(format!("Constant #{}", i + 1), interval))
            .collect())
    }

    /// 与已接受区段重叠时，用两者中较大者替换原区段；否则追加
    fn merge(accepted: &mut Vec<Interval>, candidate: Interval) {
        match accepted.iter_mut().find(|existing| existing.overlaps_with(&candidate)) {
            Some(existing) => {
                debug!(existing = %existing, candidate = %candidate, "overlapping constants merged");
                *existing = (*existing).max(candidate);
            }
            None => accepted.push(candidate),
        }
    }
}
