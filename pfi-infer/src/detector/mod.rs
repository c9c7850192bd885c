//! 字段检测模块
//!
//! - 前导码：各帧估计值的众数
//! - 同步字：紧跟前导码、半字节对齐后出现最多的一致区段

pub mod preamble;
pub mod sync;

pub use preamble::PreambleDetector;
pub use sync::SyncDetector;
