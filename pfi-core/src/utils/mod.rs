//! 工具模块
//!
//! 比特序列的解析与转换

use crate::error::InferenceError;

/// 位操作工具
pub mod bit_ops {
    /// 将字节数组展开为比特序列（MSB first）
    pub fn unpack_bits(data: &[u8]) -> Vec<bool> {
        let mut bits = Vec::with_capacity(data.len() * 8);
        for &byte in data {
            for bit_idx in (0..8).rev() {
                bits.push((byte >> bit_idx) & 1 == 1);
            }
        }
        bits
    }

    /// 起始处交替比特（1010…或0101…）的长度
    pub fn leading_alternating_len(bits: &[bool]) -> usize {
        if bits.is_empty() {
            return 0;
        }
        1 + bits.windows(2).take_while(|w| w[0] != w[1]).count()
    }
}

/// 解析 `'0'`/`'1'` 文本为比特序列，忽略空白
pub fn parse_bit_str(text: &str) -> Result<Vec<bool>, InferenceError> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(InferenceError::InvalidBit { position, found }),
        })
        .collect()
}
