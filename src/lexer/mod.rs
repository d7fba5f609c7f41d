pub mod lexer;
pub mod rules;
pub mod token;

pub use lexer::{lex, lex_lossy, tokenize, Tokens};
pub use rules::{rule_table, LiteralMatcher, Matcher, PatternMatcher, Rule, RuleTable};
pub use token::{Token, TokenKind};
