//! 比特区间
//!
//! 闭区间 `[start, end]`，两端均为比特下标

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::InferenceError;

/// 半字节宽度（比特）
pub const NIBBLE_BITS: usize = 4;

/// 比特闭区间
///
/// 排序规则：长度优先（越长越大），长度相同时起点越靠后越大。
/// 在多个重叠候选中取最大值时，总是得到信息量最大且确定的那一个。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: usize,
    end: usize,
}

/// 反序列化中间形式，经 `Interval::new` 校验后才成为区间
#[derive(Deserialize)]
struct RawInterval {
    start: usize,
    end: usize,
}

impl TryFrom<RawInterval> for Interval {
    type Error = InferenceError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.start, raw.end)
    }
}

impl Interval {
    /// 创建区间，起点大于终点时返回错误
    pub fn new(start: usize, end: usize) -> Result<Self, InferenceError> {
        if start > end {
            return Err(InferenceError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// 区间覆盖的比特数
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// 是否完整包含另一个区间
    pub fn covers(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// 两区间是否至少共享一个比特
    pub fn overlaps_with(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// 求交集，不相交时返回 `None`
    pub fn find_common_interval(&self, other: &Interval) -> Option<Interval> {
        if !self.overlaps_with(other) {
            return None;
        }
        Some(Interval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// 半字节对齐
    ///
    /// 两端分别映射为 `4·⌊(x+1)/4⌋ − 1`。起点落在第一个半字节内时
    /// 对齐结果为负，返回 `None`。
    pub fn nibble_aligned(&self) -> Option<Interval> {
        let align = |x: usize| -> i64 {
            let nibble = NIBBLE_BITS as i64;
            nibble * ((x as i64 + 1) / nibble) - 1
        };

        let start = align(self.start);
        let end = align(self.end);
        if start < 0 {
            return None;
        }
        Some(Interval {
            start: start as usize,
            end: end as usize,
        })
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.start.cmp(&other.start))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
