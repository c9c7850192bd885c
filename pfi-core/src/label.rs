//! 字段标签
//!
//! 推断结果的抽象描述，供下游标注/渲染层使用

use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// 检测到的字段
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldLabel {
    pub name: String,
    /// 起始比特（含）
    pub start: usize,
    /// 结束比特（含）
    pub end: usize,
    /// 值类型索引（不透明）
    pub value_type_index: usize,
    /// 显示颜色索引（不透明，可缺省）
    pub color_index: Option<usize>,
}

impl FieldLabel {
    pub fn new(name: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            value_type_index: 0,
            color_index: None,
        }
    }

    pub fn from_interval(name: impl Into<String>, interval: Interval) -> Self {
        Self::new(name, interval.start(), interval.end())
    }
}
