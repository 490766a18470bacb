//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 参数均为位置参数：`hide <key> <image> <message> <output>`
//! 与 `discover <key> <image> <output>`。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用密钥异或混淆后，
/// 在无损格式图像 (如 PNG, BMP) 中隐藏或发现任意文件内容。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用密钥异或混淆后，在无损格式图像 (如 PNG, BMP) 中隐藏或发现任意文件内容。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏) 和 discover (发现)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将消息文件的内容隐藏到无损格式图像中。
    Hide(HideArgs),

    /// 从经过隐写的图像中取出隐藏的消息。
    Discover(DiscoverArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于混淆消息的密钥 (按 UTF-8 字节循环使用)。
    pub key: String,

    /// 作为载体的输入图像文件路径 (如 PNG, BMP)。
    pub image: PathBuf,

    /// 要隐藏的消息文件路径，内容按原始字节处理。
    pub message: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径，格式由扩展名决定且必须无损。
    pub output: PathBuf,
}

/// 'discover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DiscoverArgs {
    /// 隐藏消息时使用的同一密钥。
    pub key: String,

    /// 已隐藏消息的图像文件路径。
    pub image: PathBuf,

    /// 保存恢复出的消息的输出路径。
    pub output: PathBuf,
}
