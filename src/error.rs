//! # 错误类型模块
//!
//! 隐写核心算法的错误分类。命令行层使用 `anyhow` 为这些错误附加上下文。

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    #[error("Invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },

    #[error("Message too long: {length} bytes, maximum {max} bytes allowed")]
    PayloadTooLarge { length: usize, max: usize },

    #[error(
        "Input image is too small to hide the message: need {required} pixels, image offers {available}"
    )]
    ImageTooSmall { required: u64, available: u64 },

    #[error(
        "Corrupt header: message length {length} needs {required} pixels, image has only {available}"
    )]
    CorruptData {
        length: usize,
        required: u64,
        available: u64,
    },
}

impl StegoError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StegoError>;
