use image::RgbImage;

use crate::bitstream::{self, UnitWidth};
use crate::constants::CHANNELS_PER_PIXEL;
use crate::error::StegoError;

/// 图像可承载的隐写比特数，即可用的颜色通道总数。
pub fn capacity(pixels: &RgbImage) -> usize {
    pixels.width() as usize * pixels.height() as usize * CHANNELS_PER_PIXEL
}

/// 隐藏 `payload_len` 个字节所需的比特数，含一个终止单元。
pub fn required_bits(payload_len: usize, width: UnitWidth) -> usize {
    (payload_len + 1) * width.bits()
}

// 将通道值的奇偶性调整为目标比特，且只移动 1。
// 255 是唯一需要钳制的值：加 1 会溢出，因此改用 254 (同为偶数)。
fn with_parity(value: u8, bit: bool) -> u8 {
    if (value & 1 == 1) == bit {
        value
    } else if value == u8::MAX {
        u8::MAX - 1
    } else {
        value + 1
    }
}

/// 将载荷写入图像各通道的奇偶校验位，返回一幅新图像，原图不被修改。
///
/// 载荷比特用尽后，剩余的所有通道都会被调整为偶校验，
/// 紧随载荷的前 `width.bits()` 个偶校验通道即构成终止序列。
///
/// # Errors
///
/// * [`StegoError::CapacityExceeded`] - 载荷加终止单元超出图像容量。
/// * [`StegoError::UnsupportedByte`] - 载荷字节超出所选单元宽度的范围。
pub fn embed(
    payload: &[u8],
    pixels: &RgbImage,
    width: UnitWidth,
) -> Result<RgbImage, StegoError> {
    let bits = bitstream::pack(payload, width)?;

    let required = bits.len() + width.bits();
    let available = capacity(pixels);
    if required > available {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }

    let mut doctored = pixels.clone();
    let mut position = 0usize;

    for pixel in doctored.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let bit = bits.get(position).copied().unwrap_or(false);
            *channel = with_parity(*channel, bit);
            position += 1;
        }
    }

    Ok(doctored)
}

/// 从图像各通道的奇偶校验位中恢复载荷。
///
/// 按与 [`embed`] 相同的顺序读取每个通道的校验位，一旦出现连续
/// `width.bits()` 个零比特即停止；该终止单元不属于载荷，会被去掉。
/// 若整幅图像中没有终止序列，则返回已收集到的完整单元 (可能为空)。
pub fn extract(pixels: &RgbImage, width: UnitWidth) -> Vec<u8> {
    let unit = width.bits();
    let mut bits = Vec::new();
    let mut zero_run = 0usize;

    'pixels: for pixel in pixels.pixels() {
        for &channel in pixel.0.iter() {
            let bit = channel & 1 == 1;
            bits.push(bit);

            if bit {
                zero_run = 0;
            } else {
                zero_run += 1;
            }

            if zero_run >= unit {
                break 'pixels;
            }
        }
    }

    let mut payload = bitstream::unpack(&bits, width);

    if zero_run >= unit {
        payload.pop();
    }

    payload
}
