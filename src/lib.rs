//! # Suanjing
//!
//! A lexer for the constrained classical-Chinese register in which the
//! arithmetic word-problems of the Nine Chapters canon are written. A passage
//! such as `今有田广十二步` is split into typed tokens, the order of the token
//! categories is validated against a finite-state grammar, and every numeral
//! and unit literal is recorded in a symbol table for a downstream parser.
//!
//! ```no_run
//! use suanjing::Lexer;
//!
//! let mut lexer = Lexer::from_numeral_file("numerals.txt").unwrap();
//! let result = lexer.tokenize("今有田广十二步");
//! assert!(result.failure.is_none());
//! assert_eq!(result.tokens.len(), 6);
//! ```

mod automaton;
mod lexer;
mod registry;
mod scanner;
mod symbols;

use std::fmt;

pub use automaton::State;
pub use lexer::{FailureKind, LexFailure, Lexer, Tokenized};
pub use registry::{BuildError, PatternRegistry};
pub use scanner::{Scanner, Unit};
pub use symbols::SymbolTable;

/// A lexical category. The declaration order is the priority order: when two
/// categories could match at the same position, the one declared earlier
/// wins, and [`Other`](Category::Other) is the catch-all for any character
/// outside the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// A numeral literal, e.g. `九亿零八百七十六万五千四百三十二`.
    Number,
    /// A problem opener: 今, 又, 有.
    Lexeme,
    /// A measured quantity: 田, 广, 从, 周, 径, 弦, 矢.
    Type,
    /// A shape or side qualifier: 圭, 邪, 箕, 圆, 宛, 弧, 环, 头, 正, 畔, 舌, 踵, 下, 中, 外.
    Prefix,
    /// A unit of measure: 步, 里, 人, 钱.
    Unit,
    /// An interrogative: 问, 为, 馀, 得, 各, 约之, 合之, 几何, 减多益少, 孰, 多, 而, 平.
    Question,
    /// A fraction operator: 分, 之, 减其.
    Function,
    /// Sentence punctuation: ，, 。, ？, 、.
    Punctuation,
    /// Any maximal run of characters outside the vocabulary.
    Other,
}

impl Category {
    /// All nine categories, in priority order.
    pub const ALL: [Category; 9] = [
        Category::Number,
        Category::Lexeme,
        Category::Type,
        Category::Prefix,
        Category::Unit,
        Category::Question,
        Category::Function,
        Category::Punctuation,
        Category::Other,
    ];

    /// The category's conventional uppercase name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Number => "NUMBER",
            Category::Lexeme => "LEXEME",
            Category::Type => "TYPE",
            Category::Prefix => "PREFIX",
            Category::Unit => "UNIT",
            Category::Question => "QUESTION",
            Category::Function => "FUNCTION",
            Category::Punctuation => "PUNCTUATION",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One token of a passage: a category together with the matched text.
/// Tokens are created by the [`Lexer`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub category: Category,
    pub text: String,
}

impl Token {
    pub fn new(category: Category, text: impl Into<String>) -> Token {
        Token {
            category,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: '{}'", self.category, self.text)
    }
}
