//! # 隐写核心算法模块
//!
//! 布局：像素 (0, 0) 的 R、G、B 三个通道以大端顺序保存 24 bits 的消息长度 L；
//! 之后按行优先顺序，每个消息字节与密钥流字节异或后占用 3 个像素的最低位：
//!
//! | 像素 | R     | G     | B      |
//! |------|-------|-------|--------|
//! | A    | bit 0 | bit 1 | bit 2  |
//! | B    | bit 3 | bit 4 | bit 5  |
//! | C    | bit 6 | bit 7 | 固定 0 |
//!
//! 其余所有位保持原样。

use crate::constants::{CURSOR_START, HEADER_PIXEL, MAX_PAYLOAD_LEN, PIXELS_PER_BYTE};
use crate::error::{Result, StegoError};
use crate::grid::{PixelGrid, Traversal};
use crate::keystream::KeyStream;
use log::debug;

/// 持有密钥流的隐写编解码器，每次调用互不影响。
#[derive(Debug, Clone)]
pub struct PixelCodec {
    key: KeyStream,
}

impl PixelCodec {
    /// # Errors
    ///
    /// 密钥为空时返回 `StegoError::InvalidArgument`。
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            key: KeyStream::new(key)?,
        })
    }

    pub fn with_key_stream(key: KeyStream) -> Self {
        Self { key }
    }

    /// 该网格最多能隐藏的消息字节数。
    pub fn capacity<G: PixelGrid>(grid: &G) -> usize {
        let pixels = grid.pixel_count();
        if pixels < 2 {
            return 0;
        }
        let by_pixels = (pixels - 2) / PIXELS_PER_BYTE;
        usize::try_from(by_pixels).map_or(MAX_PAYLOAD_LEN, |n| n.min(MAX_PAYLOAD_LEN))
    }

    /// 将 `payload` 隐藏到 `grid` 的副本中并返回该副本，原网格不变。
    ///
    /// # Errors
    ///
    /// * 网格没有像素：`InvalidArgument`。
    /// * 消息长度不小于 `0x00FFFFFE`：`PayloadTooLarge`。
    /// * `W*H - 1 < 1 + 3*L`：`ImageTooSmall`。
    pub fn hide<G: PixelGrid + Clone>(&self, grid: &G, payload: &[u8]) -> Result<G> {
        ensure_grid(grid)?;
        ensure_capacity(grid.pixel_count(), payload.len())?;

        debug!(
            "hiding {} bytes into {}x{} grid with a {}-byte key",
            payload.len(),
            grid.width(),
            grid.height(),
            self.key.len()
        );

        let mut dest = grid.clone();
        let (hx, hy) = HEADER_PIXEL;
        dest.set_rgb(hx, hy, length_header(payload.len()));

        let mut cursor = Traversal::starting_at(CURSOR_START, grid.width());
        for (index, &byte) in payload.iter().enumerate() {
            embed_byte(&mut dest, &mut cursor, byte ^ self.key.at(index));
        }

        Ok(dest)
    }

    /// 从 `grid` 中恢复之前隐藏的消息。
    ///
    /// # Errors
    ///
    /// * 网格没有像素：`InvalidArgument`。
    /// * 长度头所需像素超出网格：`CorruptData`。
    pub fn discover<G: PixelGrid>(&self, grid: &G) -> Result<Vec<u8>> {
        ensure_grid(grid)?;

        let (hx, hy) = HEADER_PIXEL;
        let [r, g, b] = grid.rgb(hx, hy);
        let length = (usize::from(r) << 16) | (usize::from(g) << 8) | usize::from(b);

        let required = CURSOR_START + PIXELS_PER_BYTE * length as u64;
        let available = grid.pixel_count();
        if required > available {
            return Err(StegoError::CorruptData {
                length,
                required,
                available,
            });
        }

        debug!("header announces {length} bytes, {required} of {available} pixels in use");

        let mut cursor = Traversal::starting_at(CURSOR_START, grid.width());
        Ok((0..length)
            .map(|index| extract_byte(grid, &mut cursor) ^ self.key.at(index))
            .collect())
    }
}

/// 隐藏前的长度与容量检查，顺序与 `PixelCodec::hide` 相同。
///
/// 容量公式 `W*H - 1 >= 1 + 3*L` 对长度像素做了两次预留，这里原样保留。
pub fn ensure_capacity(pixel_count: u64, payload_len: usize) -> Result<()> {
    if payload_len > MAX_PAYLOAD_LEN {
        return Err(StegoError::PayloadTooLarge {
            length: payload_len,
            max: MAX_PAYLOAD_LEN,
        });
    }

    let available = pixel_count.saturating_sub(1);
    let required = 1 + PIXELS_PER_BYTE * payload_len as u64;
    if required > available {
        return Err(StegoError::ImageTooSmall {
            required,
            available,
        });
    }

    Ok(())
}

fn ensure_grid<G: PixelGrid>(grid: &G) -> Result<()> {
    if grid.pixel_count() == 0 {
        return Err(StegoError::invalid(
            "grid",
            format!(
                "Please specify a non-empty image, got {}x{}",
                grid.width(),
                grid.height()
            ),
        ));
    }
    Ok(())
}

fn length_header(length: usize) -> [u8; 3] {
    [(length >> 16) as u8, (length >> 8) as u8, length as u8]
}

/// 第 `index` 位，超出 8 位时为 0 (像素 C 的 B 通道)。
fn bit(value: u8, index: usize) -> u8 {
    value.checked_shr(index as u32).map_or(0, |v| v & 1)
}

fn embed_byte<G: PixelGrid>(grid: &mut G, cursor: &mut Traversal, value: u8) {
    for (slot, (x, y)) in cursor.take(PIXELS_PER_BYTE as usize).enumerate() {
        let mut channels = grid.rgb(x, y);
        for (channel, c) in channels.iter_mut().enumerate() {
            *c = (*c & 0xFE) | bit(value, slot * 3 + channel);
        }
        grid.set_rgb(x, y, channels);
    }
}

fn extract_byte<G: PixelGrid>(grid: &G, cursor: &mut Traversal) -> u8 {
    let mut value = 0u8;
    for (slot, (x, y)) in cursor.take(PIXELS_PER_BYTE as usize).enumerate() {
        for (channel, &c) in grid.rgb(x, y).iter().enumerate() {
            let index = slot * 3 + channel;
            if index < 8 {
                value |= (c & 0x01) << index;
            }
        }
    }
    value
}
