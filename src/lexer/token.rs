use crate::span::Span;
use std::fmt;

/// 一个 Token = 规则表匹配出的一段原文。
///
/// 例子：`@x = 1`
/// 会被切成：VariableMarker("@"), Identifier("x"), Whitespace(" "),
/// VariableMarker("="), Whitespace(" "), IntegerLiteral("1")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 匹配到的原文（lexeme），按顺序拼接所有 token 的 text 可还原输入
    pub text: String,
    pub span: Span,
}

impl Token {
    /// token 起点的 byte offset。
    pub fn offset(&self) -> usize {
        self.span.start
    }
}

/// Token 的种类。规则表固定，所以这里是封闭枚举。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    /// 运算符与标点：`==` `<<` `[.` `(` `,` ...
    Operator,
    /// `@`、`def`、`=` 共用这一类
    VariableMarker,
    Identifier,
    FloatLiteral,
    /// 可带前导 `-` 与后缀 `u/i/s/l`
    IntegerLiteral,
    DoubleQuotedString,
    SingleQuotedString,
    /// 只由 `lex_lossy` 产生：无法匹配的单个字符
    Error,
}

impl TokenKind {
    /// 高亮分类名（与 Pygments 的 token 类型层级一致）。
    pub fn style_name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "Text",
            TokenKind::Operator => "Operator",
            TokenKind::VariableMarker => "Name.Variable",
            TokenKind::Identifier => "Name.Other",
            TokenKind::FloatLiteral => "Literal.Number.Float",
            TokenKind::IntegerLiteral => "Literal.Number.Integer",
            TokenKind::DoubleQuotedString => "Literal.String.Double",
            TokenKind::SingleQuotedString => "Literal.String.Single",
            TokenKind::Error => "Error",
        }
    }

    /// HTML 输出用的短 CSS class。
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "w",
            TokenKind::Operator => "o",
            TokenKind::VariableMarker => "nv",
            TokenKind::Identifier => "nx",
            TokenKind::FloatLiteral => "mf",
            TokenKind::IntegerLiteral => "mi",
            TokenKind::DoubleQuotedString => "s2",
            TokenKind::SingleQuotedString => "s1",
            TokenKind::Error => "err",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
