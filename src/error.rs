use crate::span::Span;
use std::path::PathBuf;
use thiserror::Error;

/// 统一错误类型。
///
/// 词法层只有一种错误：`UnmatchedInput`（当前位置没有任何规则能匹配）。
/// `Io` 只在读取源文件时出现，词法分析本身不做 I/O。
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "unmatched input {found:?} at offset {offset} (line {}, col {})",
        .span.start_line,
        .span.start_col
    )]
    UnmatchedInput {
        /// 出错位置的 byte offset
        offset: usize,
        /// 出错位置上的字符
        found: char,
        span: Span,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// 机器可读的错误码，便于测试断言。
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnmatchedInput { .. } => "UnmatchedInput",
            Error::Io { .. } => "Io",
        }
    }

    /// 错误位置（I/O 错误没有位置）。
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::UnmatchedInput { span, .. } => Some(*span),
            Error::Io { .. } => None,
        }
    }

    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnmatchedInput { offset, .. } => Some(*offset),
            Error::Io { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
