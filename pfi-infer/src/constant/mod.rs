//! 常量区间模块
//!
//! 提供常量字段推断的核心步骤：
//! - 帧对逐比特比较，记录一致区段
//! - 常量区间表的缓存与失效
//! - 跨全部帧求交，得到全局常量

pub mod aggregator;
pub mod cache;
pub mod scanner;
pub mod table;

pub use aggregator::ConstantAggregator;
pub use cache::ConstantCache;
pub use scanner::PairwiseConstantScanner;
pub use table::{ConstantTable, PairKey};
