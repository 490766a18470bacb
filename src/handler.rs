//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `discover` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、图像解码与编码、调用核心隐写算法以及向用户报告结果。
//! 所有输出先在内存中完整生成，再一次性写入目标文件，失败时不会留下残缺的输出。

use crate::cli::{DiscoverArgs, HideArgs};
use crate::keystream::KeyStream;
use crate::steganography::PixelCodec;
use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageFormat, RgbImage};
use log::info;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// 可以安全保存隐写结果的无损格式。
const LOSSLESS_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
    ImageFormat::Qoi,
];

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取载体图像和消息文件、用密钥构造编解码器并隐藏消息，
/// 最后按输出路径的扩展名编码图像并写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含密钥与输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 图像或消息文件不存在，或无法读取、解码。
/// * 密钥为空，或输出路径不是受支持的无损格式。
/// * 消息过长，或图像没有足够的空间隐藏消息。
/// * 无法编码或写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    ensure_exists(&args.image, "Image")?;
    ensure_exists(&args.message, "Message")?;

    let format = output_format(&args.output)?;
    let codec = codec_for(&args.key)?;
    let picture = load_grid(&args.image)?;

    let message = fs::read(&args.message).with_context(|| {
        format!(
            "Unable to read message file: {}",
            args.message.to_string_lossy().red().bold()
        )
    })?;
    info!("read {} message bytes from {}", message.len(), args.message.display());

    let hidden = codec.hide(&picture, &message).with_context(|| {
        format!(
            "Failed to hide the message in the image. \nMessage: {} bytes, Capacity: {} bytes",
            message.len().to_string().red().bold(),
            PixelCodec::capacity(&picture).to_string().green().bold()
        )
    })?;

    let mut encoded = Cursor::new(Vec::new());
    hidden
        .write_to(&mut encoded, format)
        .with_context(|| format!("Unable to encode the result image as {:?}", format))?;
    info!(
        "encoded {} bytes as {:?} for {}",
        encoded.get_ref().len(),
        format,
        args.output.display()
    );

    fs::write(&args.output, encoded.into_inner()).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        args.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Discover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、用同一密钥恢复消息，
/// 最后将恢复的消息原样写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含密钥与输入/输出路径的 `DiscoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 图像文件不存在，或无法读取、解码。
/// * 密钥为空。
/// * 图像中的长度头超出图像容量 (图像未经隐写或已损坏)。
/// * 无法写入到目标文件。
pub fn handle_discover(args: DiscoverArgs) -> Result<()> {
    ensure_exists(&args.image, "Image")?;

    let codec = codec_for(&args.key)?;
    let picture = load_grid(&args.image)?;

    let message = codec.discover(&picture).with_context(|| {
        format!(
            "Failed to discover a message in '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    info!("recovered {} message bytes", message.len());

    fs::write(&args.output, message).with_context(|| {
        format!(
            "Unable to write to target message file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully discovered and saved: {}",
        args.output.to_string_lossy().green().bold()
    );
    Ok(())
}

fn ensure_exists(path: &Path, what: &str) -> Result<()> {
    anyhow::ensure!(
        path.is_file(),
        "{} file does not exist: {}",
        what,
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn codec_for(key: &str) -> Result<PixelCodec> {
    let key = KeyStream::from_text(key).context("Unable to use the given key")?;
    Ok(PixelCodec::with_key_stream(key))
}

/// 读取并解码图像，统一转换为 RGB8 (丢弃 alpha 通道)。
fn load_grid(path: &Path) -> Result<RgbImage> {
    let picture = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    info!(
        "loaded {}x{} image from {}",
        picture.width(),
        picture.height(),
        path.display()
    );
    Ok(picture.to_rgb8())
}

/// 根据输出路径的扩展名确定图像格式，拒绝有损或不支持的格式。
fn output_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).with_context(|| {
        format!(
            "Unable to determine the image format of output path: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        LOSSLESS_FORMATS.contains(&format),
        "Output format {:?} is not supported. \nUse a lossless format: png, bmp, tiff, webp or qoi.",
        format
    );

    Ok(format)
}
