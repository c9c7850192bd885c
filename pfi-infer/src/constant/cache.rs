//! 常量区间表缓存
//!
//! 表在首次需要时构建，之后复用；前导码长度变化或显式失效后重建。

use pfi_core::InferenceError;
use tracing::debug;

use super::table::ConstantTable;

#[derive(Debug, Clone, Default)]
pub struct ConstantCache {
    table: Option<ConstantTable>,
}

impl ConstantCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否已有缓存的表
    pub fn is_built(&self) -> bool {
        self.table.is_some()
    }

    /// 获取缓存的表，缺失或前导码长度不符时调用 `build` 重建
    pub fn get_or_try_build<B>(
        &mut self,
        preamble_end: usize,
        build: B,
    ) -> Result<&ConstantTable, InferenceError>
    where
        B: FnOnce() -> Result<ConstantTable, InferenceError>,
    {
        match self.table.take() {
            Some(table) if table.preamble_end() == preamble_end => Ok(&*self.table.insert(table)),
            stale => {
                if let Some(old) = stale {
                    debug!(
                        old_preamble_end = old.preamble_end(),
                        preamble_end, "preamble changed, rebuilding constant table"
                    );
                }
                let table = build()?;
                Ok(&*self.table.insert(table))
            }
        }
    }

    /// 丢弃缓存
    pub fn invalidate(&mut self) {
        self.table = None;
    }
}
