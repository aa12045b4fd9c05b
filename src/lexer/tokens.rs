use std::fmt::Display;

use crate::Span;

/// Syntactic categories produced by the scanner.
///
/// Fixed-lexeme categories are bound to exactly one literal (see
/// [`Category::literal`]); `Ident`, `Numeral`, `EOF` and `Error` are open.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Category {
    Eq,     // ==
    GtEq,   // >=
    LtEq,   // <=
    Gt,     // >
    Lt,     // <
    Arrow,  // ->
    Maps,   // =>
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    Assign, // =
    LPar,   // (
    RPar,   // )
    Semi,   // ;
    Comma,  // ,

    // Reserved
    If,
    Else,
    Elif,
    While,
    For,
    Type,

    Ident,
    Numeral,
    EOF,
    Error,
}

impl Category {
    pub const ALL: [Category; 26] = [
        Category::Eq,
        Category::GtEq,
        Category::LtEq,
        Category::Gt,
        Category::Lt,
        Category::Arrow,
        Category::Maps,
        Category::Plus,
        Category::Minus,
        Category::Star,
        Category::Slash,
        Category::Assign,
        Category::LPar,
        Category::RPar,
        Category::Semi,
        Category::Comma,
        Category::If,
        Category::Else,
        Category::Elif,
        Category::While,
        Category::For,
        Category::Type,
        Category::Ident,
        Category::Numeral,
        Category::EOF,
        Category::Error,
    ];

    /// The literal this category stands for, or `None` for open categories.
    pub const fn literal(self) -> Option<&'static str> {
        match self {
            Category::Eq => Some("=="),
            Category::GtEq => Some(">="),
            Category::LtEq => Some("<="),
            Category::Gt => Some(">"),
            Category::Lt => Some("<"),
            Category::Arrow => Some("->"),
            Category::Maps => Some("=>"),
            Category::Plus => Some("+"),
            Category::Minus => Some("-"),
            Category::Star => Some("*"),
            Category::Slash => Some("/"),
            Category::Assign => Some("="),
            Category::LPar => Some("("),
            Category::RPar => Some(")"),
            Category::Semi => Some(";"),
            Category::Comma => Some(","),
            Category::If => Some("if"),
            Category::Else => Some("else"),
            Category::Elif => Some("elif"),
            Category::While => Some("while"),
            Category::For => Some("for"),
            Category::Type => Some("type"),
            Category::Ident | Category::Numeral | Category::EOF | Category::Error => None,
        }
    }

    /// Name used on the parser side of the contract, e.g. `ARROW`.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Eq => "EQ",
            Category::GtEq => "GTEQ",
            Category::LtEq => "LTEQ",
            Category::Gt => "GT",
            Category::Lt => "LT",
            Category::Arrow => "ARROW",
            Category::Maps => "MAPS",
            Category::Plus => "PLUS",
            Category::Minus => "MINUS",
            Category::Star => "STAR",
            Category::Slash => "SLASH",
            Category::Assign => "ASSIGN",
            Category::LPar => "LPAR",
            Category::RPar => "RPAR",
            Category::Semi => "SEMI",
            Category::Comma => "COMMA",
            Category::If => "IF",
            Category::Else => "ELSE",
            Category::Elif => "ELIF",
            Category::While => "WHILE",
            Category::For => "FOR",
            Category::Type => "TYPE",
            Category::Ident => "IDENT",
            Category::Numeral => "NUMERAL",
            Category::EOF => "EOF",
            Category::Error => "ERROR",
        }
    }

    pub fn is_fixed(self) -> bool {
        self.literal().is_some()
    }

    /// Fixed categories whose literal has identifier shape.
    pub fn is_keyword(self) -> bool {
        self.literal()
            .is_some_and(|literal| literal.starts_with(|c: char| c.is_ascii_alphabetic()))
    }

    pub fn fixed() -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(|category| category.is_fixed())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub category: Category,
    /// Exact source text; `None` only for `EOF`.
    pub lexeme: Option<String>,
    pub span: Span,
}

impl Token {
    fn is_one_of_many(&self, categories: &[Category]) -> bool {
        categories.contains(&self.category)
    }

    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }

    /// One-line rendering: the category, followed by the lexeme for open
    /// categories whose text is not implied by the category itself.
    pub fn debug_line(&self) -> String {
        match self.lexeme() {
            Some(lexeme)
                if self.is_one_of_many(&[Category::Ident, Category::Numeral, Category::Error]) =>
            {
                format!("{} ({})", self.category, lexeme)
            }
            _ => self.category.to_string(),
        }
    }
}
