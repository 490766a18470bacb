//! # 密钥流模块
//!
//! 密钥流是一段不可变、非空的字节序列，按下标循环读取 (`key[i mod len]`)，
//! 与消息字节逐个异或。它只用于简单混淆，并不提供密码学意义上的安全性。

use crate::error::{Result, StegoError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStream {
    bytes: Vec<u8>,
}

impl KeyStream {
    /// 由任意字节序列构造密钥流。
    ///
    /// # Errors
    ///
    /// 字节序列为空时返回 `StegoError::InvalidArgument`。
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(StegoError::invalid(
                "key_stream",
                "Please specify a non-empty key stream!",
            ));
        }
        Ok(Self { bytes })
    }

    /// 使用字符串的 UTF-8 编码作为密钥流。
    pub fn from_text(key: &str) -> Result<Self> {
        Self::new(key.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 第 `index` 个消息字节对应的密钥字节，超出长度后从头循环。
    pub fn at(&self, index: usize) -> u8 {
        self.bytes[index % self.bytes.len()]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        let err = KeyStream::new(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            StegoError::InvalidArgument {
                parameter: "key_stream",
                ..
            }
        ));
        assert!(KeyStream::from_text("").is_err());
    }

    #[test]
    fn index_wraps_around() {
        let key = KeyStream::new(vec![1, 2, 3]).unwrap();
        let read: Vec<u8> = (0..7).map(|i| key.at(i)).collect();
        assert_eq!(read, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn text_key_uses_utf8_bytes() {
        let key = KeyStream::from_text("é").unwrap();
        assert_eq!(key.as_bytes(), &[0xC3, 0xA9]);
        assert_eq!(key.len(), 2);
    }
}
