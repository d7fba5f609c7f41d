pub mod error;
pub mod highlight;
pub mod info;
pub mod lexer;
pub mod span;

// 对外公开的核心类型/函数（给 CLI、测试、以及高亮前端使用）。
pub use error::Error;
pub use highlight::{render_ansi, render_html, render_tokens, HighlightOptions};
pub use info::{LexerInfo, TAB};
pub use lexer::{lex, lex_lossy, tokenize, Token, TokenKind, Tokens};
pub use span::{Position, Span};

/// 读取源文件（词法分析本身不做 I/O，这里给 CLI 与调用方一个便捷入口）。
pub fn read_source(path: impl AsRef<std::path::Path>) -> error::Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
