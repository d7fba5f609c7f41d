use crate::error::{Error, Result};
use crate::lexer::rules::{rule_table, RuleTable};
use crate::lexer::token::{Token, TokenKind};
use crate::span::{Position, Span};

/// 词法分析入口：把源代码切成一串 Token。
///
/// 空白也会作为 token 保留，所以拼接所有 `text` 可以还原输入。
/// 遇到任何规则都无法匹配的位置时返回 `UnmatchedInput`，不做恢复。
pub fn lex(src: &str) -> Result<Vec<Token>> {
    tokenize(src).collect()
}

/// 惰性版本：每次 `next()` 只匹配一个 token。
///
/// 纯函数：对同一输入再次调用即可“重新开始”。
pub fn tokenize(src: &str) -> Tokens<'_> {
    Tokens::new(src)
}

/// 容错版本（调用方策略，不属于核心契约）：
/// 无法匹配时记录错误，产出一个单字符的 `TokenKind::Error`，然后从下一个字符继续。
pub fn lex_lossy(src: &str) -> (Vec<Token>, Vec<Error>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut scanner = tokenize(src);

    while let Some(item) = scanner.next() {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => {
                errors.push(err);
                if let Some(token) = scanner.recover() {
                    tokens.push(token);
                }
            }
        }
    }

    (tokens, errors)
}

/// 扫描器状态：一个扫描指针，只属于本次调用。
pub struct Tokens<'a> {
    src: &'a str,
    rules: &'static RuleTable,
    pos: Position,
    /// 出错后停在出错位置，直到 `recover()` 越过它
    failed: bool,
}

impl<'a> Tokens<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            rules: rule_table(),
            pos: Position::default(),
            failed: false,
        }
    }

    /// 当前扫描位置。
    pub fn position(&self) -> Position {
        self.pos
    }

    /// 越过出错位置的一个字符，把它作为 `Error` token 返回，之后可以继续迭代。
    ///
    /// 没有处于出错状态时返回 `None`。
    pub fn recover(&mut self) -> Option<Token> {
        if !self.failed {
            return None;
        }
        let ch = self.src[self.pos.offset..].chars().next()?;
        self.failed = false;
        let token = self.emit(TokenKind::Error, ch.len_utf8());
        tracing::debug!(offset = token.offset(), "skipped unmatched character");
        Some(token)
    }

    fn is_eof(&self) -> bool {
        self.pos.offset >= self.src.len()
    }

    /// 产出 `[pos, pos + len)` 的 token 并前移扫描指针。
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let text = &self.src[start.offset..start.offset + len];
        self.pos = start.advance(text);
        Token {
            kind,
            text: text.to_string(),
            span: Span::between(start, self.pos),
        }
    }

    fn unmatched(&self) -> Error {
        let found = self.src[self.pos.offset..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Error::UnmatchedInput {
            offset: self.pos.offset,
            found,
            span: Span::point(self.pos),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_eof() {
            return None;
        }

        match self.rules.match_at(self.src, self.pos.offset) {
            Some((kind, len)) => {
                let token = self.emit(kind, len);
                tracing::trace!(kind = %token.kind, offset = token.offset(), text = ?token.text, "token");
                Some(Ok(token))
            }
            None => {
                self.failed = true;
                let err = self.unmatched();
                tracing::debug!(%err, "no rule matched");
                Some(Err(err))
            }
        }
    }
}
