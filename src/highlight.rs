use crate::lexer::{Token, TokenKind};

/// HTML 输出选项。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightOptions {
    /// 外层 `<div>` 的 class
    pub css_class: String,
    /// 是否在每行前加行号
    pub line_numbers: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            css_class: "highlight".to_string(),
            line_numbers: false,
        }
    }
}

/// 把 token 渲染成 HTML。
///
/// 输出格式（固定）：
/// ```text
/// <div class="highlight"><pre><span class="nv">@</span><span class="nx">x</span>
/// </pre></div>
/// ```
///
/// - 空白不包 `<span>`，原样（转义后）输出。
/// - 跨行的 token 按行拆成多个 `<span>`，保证每个标签都不跨行，行号才能插在行首。
pub fn render_html(tokens: &[Token], opts: &HighlightOptions) -> String {
    // 最后一个真正会打印行号的行：输入以换行结尾时，末尾的空行不输出
    let newlines = tokens
        .iter()
        .map(|t| t.text.matches('\n').count())
        .sum::<usize>();
    let ends_with_newline = tokens.last().is_some_and(|t| t.text.ends_with('\n'));
    let last_line = if ends_with_newline { newlines } else { newlines + 1 };
    let width = last_line.max(1).to_string().len();

    let mut out = String::new();
    out.push_str(&format!("<div class=\"{}\"><pre>", escape_html(&opts.css_class)));

    let mut line = 1;
    let mut at_line_start = true;
    for token in tokens {
        for piece in token.text.split_inclusive('\n') {
            if at_line_start && opts.line_numbers {
                out.push_str(&format!("<span class=\"lineno\">{line:>width$} </span>"));
            }

            let (body, newline) = match piece.strip_suffix('\n') {
                Some(body) => (body, true),
                None => (piece, false),
            };
            if !body.is_empty() {
                if token.kind == TokenKind::Whitespace {
                    out.push_str(&escape_html(body));
                } else {
                    out.push_str(&format!(
                        "<span class=\"{}\">{}</span>",
                        token.kind.css_class(),
                        escape_html(body)
                    ));
                }
            }

            if newline {
                out.push('\n');
                line += 1;
            }
            at_line_start = newline;
        }
    }

    out.push_str("</pre></div>\n");
    out
}

/// 终端输出：每个 token 前加 SGR 颜色，后面紧跟 reset。
pub fn render_ansi(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match ansi_color(token.kind) {
            Some(code) => {
                out.push_str(code);
                out.push_str(&token.text);
                out.push_str(ANSI_RESET);
            }
            None => out.push_str(&token.text),
        }
    }
    out
}

/// 调试用的逐行 dump：`offset line:col Kind "lexeme"`。
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{} {}:{} {} {:?}\n",
            token.span.start, token.span.start_line, token.span.start_col, token.kind, token.text
        ));
    }
    out
}

const ANSI_RESET: &str = "\x1b[0m";

fn ansi_color(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Whitespace | TokenKind::Identifier => None,
        TokenKind::Operator => Some("\x1b[33m"),
        TokenKind::VariableMarker => Some("\x1b[36m"),
        TokenKind::FloatLiteral | TokenKind::IntegerLiteral => Some("\x1b[34m"),
        TokenKind::DoubleQuotedString | TokenKind::SingleQuotedString => Some("\x1b[32m"),
        TokenKind::Error => Some("\x1b[41m"),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
