/// 源码中的一个“区间位置”。
///
/// - `start/end`：byte offset（按 UTF-8 字节计数），可直接用来切片。
/// - `*_line/*_col`：行列号（从 1 开始，列按字符计数），用于报错与行号显示。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// 起始 byte offset（包含）
    pub start: usize,
    /// 结束 byte offset（不包含）
    pub end: usize,
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            start: 0,
            end: 0,
            start_line: 1,
            start_col: 1,
            end_line: 1,
            end_col: 1,
        }
    }
}

impl Span {
    /// 由两个扫描位置构造区间。
    pub fn between(start: Position, end: Position) -> Self {
        Self {
            start: start.offset,
            end: end.offset,
            start_line: start.line,
            start_col: start.col,
            end_line: end.line,
            end_col: end.col,
        }
    }

    /// 起止相同的空区间（错误定位用）。
    pub fn point(pos: Position) -> Self {
        Self::between(pos, pos)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// 扫描指针的位置：byte offset + 行列号。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}

impl Position {
    /// 越过一段文本后的新位置。遇到 `\n` 换行、列号归 1。
    pub fn advance(self, text: &str) -> Self {
        let mut next = self;
        for ch in text.chars() {
            if ch == '\n' {
                next.line += 1;
                next.col = 1;
            } else {
                next.col += 1;
            }
        }
        next.offset += text.len();
        next
    }
}
