//! Lexical analysis.
//!
//! Converts a character source into a stream of categorised tokens for a
//! parser to consume. It handles:
//!
//! - The fixed literal table for operators, punctuation and keywords
//! - Ordered matching rules with longest match among fixed lexemes
//! - Identifiers, numerals and per-character `ERROR` tokens
//! - Whitespace and `#` line comments, which are skipped

pub mod lexer;
pub mod rules;
pub mod tokens;
