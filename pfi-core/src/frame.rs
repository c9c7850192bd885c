//! 帧抽象
//!
//! 推断引擎只读取帧的比特序列和帧自身估计的前导码长度，从不修改帧。

use crate::error::InferenceError;
use crate::utils::{bit_ops, parse_bit_str};

/// 启发式前导码估计所需的最少交替比特数
pub const MIN_PREAMBLE_BITS: usize = 4;

/// 已解码帧接口
pub trait Frame {
    /// 解码后的比特序列，在帧的生命周期内保持不变
    fn decoded_bits(&self) -> &[bool];

    /// 帧自身估计的前导码结束位置
    ///
    /// `None` 或 `Some(0)` 表示无有效估计
    fn find_preamble_end(&self) -> Option<usize>;
}

/// 前导码估计方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreambleHint {
    /// 起始交替比特长度
    Alternating,
    /// 外部给定
    Fixed(Option<usize>),
}

/// 基于比特向量的帧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitFrame {
    bits: Vec<bool>,
    preamble: PreambleHint,
}

impl BitFrame {
    pub fn new(bits: Vec<bool>) -> Self {
        Self {
            bits,
            preamble: PreambleHint::Alternating,
        }
    }

    /// 从 `'0'`/`'1'` 文本创建
    pub fn from_bit_str(text: &str) -> Result<Self, InferenceError> {
        Ok(Self::new(parse_bit_str(text)?))
    }

    /// 从字节创建（MSB first）
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::new(bit_ops::unpack_bits(data))
    }

    /// 从十六进制文本创建
    pub fn from_hex_str(text: &str) -> Result<Self, InferenceError> {
        let clean: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let data = hex::decode(&clean)
            .map_err(|e| InferenceError::Config(format!("Invalid hex frame {clean:?}: {e}")))?;
        Ok(Self::from_bytes(&data))
    }

    /// 覆盖前导码估计
    pub fn with_preamble_end(mut self, preamble_end: Option<usize>) -> Self {
        self.preamble = PreambleHint::Fixed(preamble_end);
        self
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }
}

impl Frame for BitFrame {
    fn decoded_bits(&self) -> &[bool] {
        &self.bits
    }

    fn find_preamble_end(&self) -> Option<usize> {
        match self.preamble {
            PreambleHint::Fixed(end) => end,
            PreambleHint::Alternating => {
                let len = bit_ops::leading_alternating_len(&self.bits);
                (len >= MIN_PREAMBLE_BITS).then_some(len)
            }
        }
    }
}
