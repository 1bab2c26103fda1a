/// 每个像素用于隐写的颜色通道数。
/// 只使用红、绿、蓝三个通道，透明通道 (如果存在) 在加载时被丢弃。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 未指定输出路径时，隐写结果图像文件名的默认前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本文件名的默认前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";
