//! Error types for the scanner.
//!
//! Malformed input is never an error here: it comes back as an `ERROR`
//! token. This module covers the two conditions that are:
//!
//! - Failure to read from the character source (including invalid UTF-8)
//! - A fixed-lexeme table that binds one literal to two categories

pub mod errors;
