#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::{
    lexer::{tokenize, Scanner},
    tokens::{Category, Token},
};

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start.0 == self.end.0
    }
}
