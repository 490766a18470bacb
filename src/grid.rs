//! # 像素网格模块
//!
//! 隐写算法只依赖一个抽象的 RGB 像素网格：宽、高，以及按坐标读写三个通道。
//! 本模块定义该抽象 (`PixelGrid`)、为 `image::RgbImage` 提供实现，
//! 并给出隐藏与恢复共用的行优先遍历游标 (`Traversal`)。

use image::{Rgb, RgbImage};

/// 可按 (x, y) 读写 R、G、B 三个通道的像素网格，坐标从 0 开始。
pub trait PixelGrid {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn rgb(&self, x: u32, y: u32) -> [u8; 3];

    fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]);

    /// 像素总数，使用 `u64` 避免 `W * H` 溢出。
    fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

impl PixelGrid for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }

    fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.put_pixel(x, y, Rgb(rgb));
    }
}

/// 行优先遍历游标。
///
/// 每访问一个像素后 `x += 1`，当 `x >= width` 时换到下一行 (`x = 0, y += 1`)。
/// 游标本身不检查是否越过网格底部，调用方需要先确认容量。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    x: u32,
    y: u32,
    width: u32,
}

impl Traversal {
    /// 从线性位置 `position` 开始遍历，位置 `p` 对应坐标 `(p % width, p / width)`。
    ///
    /// # Panics
    ///
    /// `width` 为 0 时 panic；调用方在此之前已校验网格非空。
    pub fn starting_at(position: u64, width: u32) -> Self {
        assert!(width > 0, "traversal over a grid with zero width");
        let w = u64::from(width);
        Self {
            x: (position % w) as u32,
            y: (position / w) as u32,
            width,
        }
    }
}

impl Iterator for Traversal {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let current = (self.x, self.y);
        self.x += 1;
        if self.x >= self.width {
            self.x = 0;
            self.y += 1;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_wraps_to_next_row() {
        let coords: Vec<_> = Traversal::starting_at(1, 3).take(6).collect();
        assert_eq!(coords, vec![(1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2)]);
    }

    #[test]
    fn traversal_on_single_column() {
        let coords: Vec<_> = Traversal::starting_at(1, 1).take(3).collect();
        assert_eq!(coords, vec![(0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn starting_position_maps_to_coordinates() {
        let mut cursor = Traversal::starting_at(10, 4);
        assert_eq!(cursor.next(), Some((2, 2)));
    }

    #[test]
    fn rgb_image_reads_back_written_pixel() {
        let mut img = RgbImage::new(2, 3);
        img.set_rgb(1, 2, [10, 20, 30]);
        assert_eq!(img.rgb(1, 2), [10, 20, 30]);
        assert_eq!(PixelGrid::width(&img), 2);
        assert_eq!(PixelGrid::height(&img), 3);
        assert_eq!(img.pixel_count(), 6);
    }
}
