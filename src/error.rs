//! # 隐写错误类型模块
//!
//! 定义核心编解码过程中可能出现的所有错误。

use std::fmt;

/// 编码过程中可能出现的错误。
///
/// 解码不会产生错误：图像过小或缺少终止序列时会优雅地降级为
/// 返回已收集到的部分数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 载荷 (含终止单元) 所需的比特数超过了图像可提供的通道数。
    CapacityExceeded { required: usize, available: usize },

    /// 字节值超出了所选单元宽度的可表示范围 (7 位传统格式仅支持 0-127)。
    UnsupportedByte { value: u8, index: usize },
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                required,
                available,
            } => write!(
                f,
                "the payload needs {required} bits but the image only provides {available}"
            ),
            Self::UnsupportedByte { value, index } => write!(
                f,
                "byte value {value} at index {index} does not fit in the 7-bit legacy format"
            ),
        }
    }
}

impl std::error::Error for StegoError {}
