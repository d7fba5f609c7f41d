use crate::lexer::token::TokenKind;
use regex_automata::meta::{BuildError, Regex};
use regex_automata::util::syntax;
use regex_automata::{Anchored, Input};
use std::sync::OnceLock;

/// 在固定位置尝试匹配的能力。
///
/// 返回匹配长度（byte），不匹配返回 `None`。必须是锚定匹配：
/// 只看 `offset` 处开始的匹配，绝不向后搜索。
pub trait Matcher: Send + Sync {
    fn match_at(&self, text: &str, offset: usize) -> Option<usize>;
}

/// 正则规则。
///
/// 编译时打开 `.` 匹配换行、`^`/`$` 按行匹配两个模式。
/// 匹配时把整个输入交给引擎、只限定起点，这样 `^` 仍能看到起点前的字符。
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Result<Self, BuildError> {
        let regex = Regex::builder()
            .syntax(
                syntax::Config::new()
                    .multi_line(true)
                    .dot_matches_new_line(true),
            )
            .build(pattern)?;
        Ok(Self { regex })
    }
}

impl Matcher for PatternMatcher {
    fn match_at(&self, text: &str, offset: usize) -> Option<usize> {
        let input = Input::new(text).range(offset..).anchored(Anchored::Yes);
        self.regex.find(input).map(|m| m.end() - offset)
    }
}

/// 固定字面量集合（运算符/标点）。
///
/// 按长度降序尝试，保证 `==` 不会被拆成两个 `=`、`<<` 不会被拆成两个 `<`。
pub struct LiteralMatcher {
    literals: Vec<&'static str>,
}

impl LiteralMatcher {
    pub fn new(literals: &[&'static str]) -> Self {
        let mut literals = literals.to_vec();
        // 稳定排序：同长度保持原顺序
        literals.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { literals }
    }
}

impl Matcher for LiteralMatcher {
    fn match_at(&self, text: &str, offset: usize) -> Option<usize> {
        let rest = text.get(offset..)?;
        self.literals
            .iter()
            .find(|lit| rest.starts_with(**lit))
            .map(|lit| lit.len())
    }
}

/// 一条规则 = (匹配器, 产出的 token 种类)。
pub struct Rule {
    pub kind: TokenKind,
    pub matcher: Box<dyn Matcher>,
}

impl Rule {
    pub fn new(kind: TokenKind, matcher: impl Matcher + 'static) -> Self {
        Self {
            kind,
            matcher: Box::new(matcher),
        }
    }
}

/// 运算符与标点。
pub const OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "<", ">", "-", "&", "|", "^", "+", "*", "/", "%", "!", ":", "?",
    "**", "~", "[", "]", "{", "}", "(", ")", "<<", ">>", "[.", ",", ";", ".",
];

/// 有序规则表：顺序即优先级，第一条匹配成功的规则胜出。
///
/// 数字规则排在运算符前面，所以紧跟数字的 `-` 属于整数字面量（`-123` 是一个 token）。
/// `def` 排在标识符前面，所以 `define` 会被切成 `def` + `ine`。
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    fn build() -> Result<Self, BuildError> {
        let rules = vec![
            // `\s` 之外再加上 \x1c-\x1f（文件/组/记录/单元分隔符），它们同样算空白
            Rule::new(TokenKind::Whitespace, PatternMatcher::new(r"[\s\x1C-\x1F]+")?),
            Rule::new(
                TokenKind::FloatLiteral,
                PatternMatcher::new(r"[0-9][0-9]*\.[0-9]+([eE][0-9]+)?")?,
            ),
            Rule::new(
                TokenKind::IntegerLiteral,
                PatternMatcher::new(r"-?[0-9]+[uisl]?")?,
            ),
            Rule::new(TokenKind::Operator, LiteralMatcher::new(OPERATORS)),
            Rule::new(TokenKind::VariableMarker, LiteralMatcher::new(&["@"])),
            Rule::new(TokenKind::VariableMarker, PatternMatcher::new(r"def|=")?),
            Rule::new(
                TokenKind::Identifier,
                PatternMatcher::new(r"[a-zA-Z_][a-zA-Z0-9_]*")?,
            ),
            Rule::new(
                TokenKind::DoubleQuotedString,
                PatternMatcher::new(r#""(\\\\|\\"|[^"])*""#)?,
            ),
            Rule::new(
                TokenKind::SingleQuotedString,
                PatternMatcher::new(r"'(\\\\|\\'|[^'])*'")?,
            ),
        ];
        tracing::debug!(rules = rules.len(), "built tab rule table");
        Ok(Self { rules })
    }

    /// 在 `offset` 处按顺序尝试每条规则，返回第一条非空匹配。
    ///
    /// 空匹配会让扫描指针原地打转，这里当作不匹配处理。
    pub fn match_at(&self, text: &str, offset: usize) -> Option<(TokenKind, usize)> {
        self.rules.iter().find_map(|rule| {
            rule.matcher
                .match_at(text, offset)
                .filter(|len| *len > 0)
                .map(|len| (rule.kind, len))
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

static RULES: OnceLock<RuleTable> = OnceLock::new();

/// 进程级只读规则表，第一次使用时构建。
pub fn rule_table() -> &'static RuleTable {
    RULES.get_or_init(|| match RuleTable::build() {
        Ok(table) => table,
        // 模式都是编译期常量，构建失败只可能是这里写错了
        Err(err) => panic!("invalid tab rule pattern: {err}"),
    })
}
