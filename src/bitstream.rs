use crate::error::StegoError;

/// 编码单个载荷字节所使用的比特数。
///
/// `Eight` 是标准格式，支持任意字节值；`Seven` 是为兼容旧版隐写图像
/// 保留的传统格式，仅支持 0-127 范围的字节。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitWidth {
    Seven,
    Eight,
}

impl UnitWidth {
    pub const fn bits(self) -> usize {
        match self {
            Self::Seven => 7,
            Self::Eight => 8,
        }
    }

    pub const fn max_value(self) -> u8 {
        match self {
            Self::Seven => 0x7F,
            Self::Eight => u8::MAX,
        }
    }
}

/// 将字节序列展开为比特序列，每个字节占 `width.bits()` 位，高位在前。
///
/// # Errors
///
/// 当某个字节的值超出所选单元宽度的可表示范围时，
/// 返回 [`StegoError::UnsupportedByte`]。
pub fn pack(bytes: &[u8], width: UnitWidth) -> Result<Vec<bool>, StegoError> {
    let mut bits = Vec::with_capacity(bytes.len() * width.bits());

    for (index, &value) in bytes.iter().enumerate() {
        if value > width.max_value() {
            return Err(StegoError::UnsupportedByte { value, index });
        }

        for shift in (0..width.bits()).rev() {
            bits.push(value >> shift & 1 == 1);
        }
    }

    Ok(bits)
}

/// 将比特序列按 `width.bits()` 一组重新组装为字节，高位在前。
/// 末尾不足一组的比特被视为残缺数据而丢弃。
pub fn unpack(bits: &[bool], width: UnitWidth) -> Vec<u8> {
    bits.chunks_exact(width.bits())
        .map(|unit| unit.iter().fold(0u8, |acc, &bit| acc << 1 | bit as u8))
        .collect()
}
