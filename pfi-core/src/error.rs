//! 推断错误定义
//!
//! "未找到"（无前导码、无常量、无同步字）不是错误，由 `Option`/空集合表示；
//! 这里只定义调用顺序错误和输入非法等真正的失败。

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// 没有任何帧可供分析
    NoFrames,
    /// 帧数量不足（需要的最少帧数, 实际帧数）
    InsufficientFrames { required: usize, actual: usize },
    /// 查询了未扫描过的帧对
    PairNotScanned(usize, usize),
    /// 帧下标越界
    FrameOutOfRange { index: usize, frame_count: usize },
    /// 非法区间（起点大于终点）
    InvalidInterval { start: usize, end: usize },
    /// 非法比特字符
    InvalidBit { position: usize, found: char },
    /// 配置错误
    Config(String),
    /// 输入输出错误
    Io(String),
    /// 扫描被取消
    Cancelled,
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceError::NoFrames => write!(f, "No frames to analyze"),
            InferenceError::InsufficientFrames { required, actual } => {
                write!(f, "Insufficient frames: need at least {required}, got {actual}")
            }
            InferenceError::PairNotScanned(i, j) => {
                write!(f, "Frame pair ({i}, {j}) was never scanned")
            }
            InferenceError::FrameOutOfRange { index, frame_count } => {
                write!(f, "Frame index {index} out of range ({frame_count} frames)")
            }
            InferenceError::InvalidInterval { start, end } => {
                write!(f, "Invalid interval: start {start} > end {end}")
            }
            InferenceError::InvalidBit { position, found } => {
                write!(f, "Invalid bit {found:?} at position {position}")
            }
            InferenceError::Config(msg) => write!(f, "Config error: {msg}"),
            InferenceError::Io(msg) => write!(f, "IO error: {msg}"),
            InferenceError::Cancelled => write!(f, "Constant scan cancelled"),
        }
    }
}

impl std::error::Error for InferenceError {}

impl From<std::io::Error> for InferenceError {
    fn from(err: std::io::Error) -> Self {
        InferenceError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InferenceError {
    fn from(err: serde_json::Error) -> Self {
        InferenceError::Config(err.to_string())
    }
}
