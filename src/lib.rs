//! # lsb_veil 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：像素网格抽象、循环密钥流，
//! 以及在 RGB 最低位中隐藏/发现字节流的编解码器。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod grid;
pub mod handler;
pub mod keystream;
pub mod steganography;

pub use error::{Result, StegoError};
pub use grid::PixelGrid;
pub use keystream::KeyStream;
pub use steganography::PixelCodec;
