use std::{error::Error as StdError, fmt::Display, io};

use thiserror::Error;

use crate::{lexer::tokens::Category, Position};

#[derive(Debug)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceRead { .. } => "SourceRead",
            ErrorImpl::DuplicateLiteral { .. } => "DuplicateLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceRead { source } if source.kind() == io::ErrorKind::InvalidData => {
                ErrorTip::Suggestion(String::from("Source text must be valid UTF-8"))
            }
            ErrorImpl::SourceRead { .. } => ErrorTip::None,
            ErrorImpl::DuplicateLiteral {
                literal,
                first,
                second,
            } => ErrorTip::Suggestion(format!(
                "Literal `{}` is bound to both {} and {}, give each category its own literal",
                literal, first, second
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.internal_error.source()
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("failed to read source")]
    SourceRead {
        #[source]
        source: io::Error,
    },
    #[error("literal {literal:?} is bound to both {first} and {second}")]
    DuplicateLiteral {
        literal: &'static str,
        first: Category,
        second: Category,
    },
}
