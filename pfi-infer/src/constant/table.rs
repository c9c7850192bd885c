//! 帧对常量区间表

use pfi_core::{InferenceError, Interval};
use std::collections::BTreeMap;

/// 无序帧对 `(first, second)`，保证 `first < second`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: usize,
    second: usize,
}

impl PairKey {
    /// 创建帧对，参数顺序无关
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            first: a.min(b),
            second: a.max(b),
        }
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn second(&self) -> usize {
        self.second
    }

    /// 所有 `i < j` 的帧对，按字典序
    pub fn all_pairs(frame_count: usize) -> impl Iterator<Item = PairKey> {
        (0..frame_count).flat_map(move |i| (i + 1..frame_count).map(move |j| PairKey::new(i, j)))
    }
}

/// 常量区间表
///
/// 记录每个已扫描帧对的一致区段（按扫描顺序），以及每一帧参与过的
/// 全部区段（可重复，用于计数）。表与构建时的前导码长度绑定。
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTable {
    preamble_end: usize,
    pairs: BTreeMap<PairKey, Vec<Interval>>,
    per_frame: Vec<Vec<Interval>>,
}

impl ConstantTable {
    pub fn new(preamble_end: usize, frame_count: usize) -> Self {
        Self {
            preamble_end,
            pairs: BTreeMap::new(),
            per_frame: vec![Vec::new(); frame_count],
        }
    }

    /// 构建该表时使用的前导码长度
    pub fn preamble_end(&self) -> usize {
        self.preamble_end
    }

    pub fn frame_count(&self) -> usize {
        self.per_frame.len()
    }

    /// 已扫描的帧对数量
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// 记录一个帧对的扫描结果
    ///
    /// 空结果同样记录，用于区分"扫描过但无常量"和"从未扫描"
    pub fn insert_pair(
        &mut self,
        key: PairKey,
        intervals: Vec<Interval>,
    ) -> Result<(), InferenceError> {
        let frame_count = self.frame_count();
        if key.second >= frame_count {
            return Err(InferenceError::FrameOutOfRange {
                index: key.second,
                frame_count,
            });
        }

        self.per_frame[key.first].extend_from_slice(&intervals);
        self.per_frame[key.second].extend_from_slice(&intervals);
        self.pairs.insert(key, intervals);
        Ok(())
    }

    /// 查询帧对的一致区段
    pub fn intervals(&self, i: usize, j: usize) -> Result<&[Interval], InferenceError> {
        let key = PairKey::new(i, j);
        self.pairs
            .get(&key)
            .map(Vec::as_slice)
            .ok_or(InferenceError::PairNotScanned(key.first, key.second))
    }

    /// 查询某帧参与过的全部区段
    pub fn intervals_for_frame(&self, index: usize) -> Result<&[Interval], InferenceError> {
        self.per_frame
            .get(index)
            .map(Vec::as_slice)
            .ok_or(InferenceError::FrameOutOfRange {
                index,
                frame_count: self.frame_count(),
            })
    }

    /// 某区段在该帧的比较中出现的次数
    pub fn occurrences(&self, index: usize, interval: &Interval) -> Result<usize, InferenceError> {
        Ok(self
            .intervals_for_frame(index)?
            .iter()
            .filter(|candidate| *candidate == interval)
            .count())
    }

    /// 按帧对顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (PairKey, &[Interval])> {
        self.pairs.iter().map(|(key, intervals)| (*key, intervals.as_slice()))
    }

    /// 没有任何一致区段
    pub fn is_empty(&self) -> bool {
        self.pairs.values().all(Vec::is_empty)
    }
}
