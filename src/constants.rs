/// 可隐藏消息的最大长度 (字节)。
/// 长度写在首个像素的 R、G、B 三个通道中，共 24 bits，
/// 保留 `0x00FFFFFF` 与 `0x00FFFFFE`，因此上限为 `0x00FFFFFD`。
pub const MAX_PAYLOAD_LEN: usize = 0x00FF_FFFF - 2;

/// 隐写单个消息字节所需的像素数。
/// 每个像素的 R、G、B 最低位各存 1 bit，8 bits 需要 3 个像素 (最后一个像素的 B 通道不用)。
pub const PIXELS_PER_BYTE: u64 = 3;

/// 存放消息长度的像素坐标。
pub const HEADER_PIXEL: (u32, u32) = (0, 0);

/// 遍历游标的起始线性位置，即紧跟在长度像素之后的 (1, 0)。
pub const CURSOR_START: u64 = 1;
