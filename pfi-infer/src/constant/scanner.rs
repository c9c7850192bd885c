//! 帧对常量扫描器
//!
//! 对每一对帧比较前导码之后的比特，记录足够长的一致区段

use pfi_core::{Frame, InferenceConfig, InferenceError, Interval};
use rayon::prelude::*;
use tracing::debug;

use super::table::{ConstantTable, PairKey};
use crate::cancel::CancelToken;

/// 帧对常量扫描器
#[derive(Debug, Clone)]
pub struct PairwiseConstantScanner {
    /// 一致区段必须严格长于该值
    min_constant_len: usize,
    /// 是否在 rayon 线程池上并行扫描
    parallel: bool,
    cancel: CancelToken,
}

impl PairwiseConstantScanner {
    pub fn new(config: &InferenceConfig) -> Self {
        Self {
            min_constant_len: config.min_constant_len,
            parallel: config.parallel,
            cancel: CancelToken::new(),
        }
    }

    /// 使用外部取消令牌
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// 扫描所有 `i < j` 的帧对，生成常量区间表
    ///
    /// 并行模式下每个帧对只产生自己的结果，全部完成后再按帧对顺序写表，
    /// 因此与串行结果完全一致。
    pub fn scan<F>(&self, frames: &[F], preamble_end: usize) -> Result<ConstantTable, InferenceError>
    where
        F: Frame + Sync,
    {
        let pairs: Vec<PairKey> = PairKey::all_pairs(frames.len()).collect();
        debug!(
            frames = frames.len(),
            pairs = pairs.len(),
            preamble_end,
            parallel = self.parallel,
            "scanning frame pairs for constant intervals"
        );

        let results: Vec<(PairKey, Vec<Interval>)> = if self.parallel {
            pairs
                .par_iter()
                .map(|&key| self.scan_key(frames, key, preamble_end))
                .collect::<Result<_, _>>()?
        } else {
            pairs
                .iter()
                .map(|&key| self.scan_key(frames, key, preamble_end))
                .collect::<Result<_, _>>()?
        };

        let mut table = ConstantTable::new(preamble_end, frames.len());
        for (key, intervals) in results {
            table.insert_pair(key, intervals)?;
        }
        Ok(table)
    }

    fn scan_key<F: Frame>(
        &self,
        frames: &[F],
        key: PairKey,
        preamble_end: usize,
    ) -> Result<(PairKey, Vec<Interval>), InferenceError> {
        if self.cancel.is_cancelled() {
            return Err(InferenceError::Cancelled);
        }

        let intervals = self.scan_pair(
            frames[key.first()].decoded_bits(),
            frames[key.second()].decoded_bits(),
            preamble_end,
        )?;
        debug!(
            first = key.first(),
            second = key.second(),
            found = intervals.len(),
            "pair scanned"
        );
        Ok((key, intervals))
    }

    /// 比较两帧前导码之后的比特，返回一致区段（绝对比特下标）
    ///
    /// 只比较两段后缀中较短的长度，较长帧的尾部被忽略。
    /// 区段长度必须严格大于 `min_constant_len`。
    pub fn scan_pair(
        &self,
        bits_a: &[bool],
        bits_b: &[bool],
        preamble_end: usize,
    ) -> Result<Vec<Interval>, InferenceError> {
        let suffix_a = bits_a.get(preamble_end..).unwrap_or(&[]);
        let suffix_b = bits_b.get(preamble_end..).unwrap_or(&[]);
        let compared = suffix_a.len().min(suffix_b.len());

        let mut intervals = Vec::new();
        let mut run_start = 0usize;
        let mut run_len = 0usize;

        for (k, (a, b)) in suffix_a.iter().zip(suffix_b).enumerate() {
            if a == b {
                run_len += 1;
                continue;
            }

            if run_len > self.min_constant_len {
                intervals.push(Interval::new(
                    preamble_end + run_start,
                    preamble_end + k - 1,
                )?);
            }
            run_len = 0;
            run_start = k + 1;
        }

        if run_len > self.min_constant_len {
            intervals.push(Interval::new(
                preamble_end + run_start,
                preamble_end + compared - 1,
            )?);
        }

        Ok(intervals)
    }
}
