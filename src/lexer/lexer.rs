use std::{
    io::{self, BufRead, Cursor},
    sync::Arc,
};

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    rules::{PatternKind, MATCH_RULES, RULE_TABLE},
    tokens::{Category, Token},
};

/// Pull-based scanner over a buffered character source.
///
/// The source is read one line at a time. No token spans a line break, so a
/// line is always enough to match the next token; whitespace that spans
/// several lines is simply skipped in several steps.
pub struct Scanner<R> {
    source: R,
    line: String,
    pos: usize,
    line_start: usize,
    last_lexeme: Option<String>,
    finished: bool,
    failure: Option<(Position, io::ErrorKind, String)>,
    file: Arc<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(source: R, file: Option<String>) -> Scanner<R> {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        debug!("scanning {}", file_name);

        Scanner {
            source,
            line: String::new(),
            pos: 0,
            line_start: 0,
            last_lexeme: None,
            finished: false,
            failure: None,
            file: file_name,
        }
    }

    /// Returns the next token, or `EOF` once the source is exhausted (and on
    /// every call after that). Only a failing read is an `Err`, and once a
    /// read has failed every later call reports the same failure.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some((position, kind, message)) = &self.failure {
            return Err(Error::new(
                ErrorImpl::SourceRead {
                    source: io::Error::new(*kind, message.clone()),
                },
                position.clone(),
            ));
        }

        if self.finished {
            return Ok(self.eof());
        }

        loop {
            if !self.fill()? {
                self.finished = true;
                debug!("end of {} at offset {}", self.file, self.offset());
                return Ok(self.eof());
            }

            match MATCH_RULES.trivia_len(self.remainder()) {
                Some(len) => self.advance_n(len),
                None => break,
            }
        }

        let (len, kind) = MATCH_RULES
            .longest_match(self.remainder())
            .unwrap_or_else(|| (self.remainder().chars().next().map_or(1, char::len_utf8), PatternKind::Any));

        let lexeme = String::from(&self.remainder()[..len]);
        let category = RULE_TABLE.resolve(&lexeme);
        let start = self.offset();
        self.advance_n(len);

        trace!("{} {:?} ({:?}) at {}..{}", category, lexeme, kind, start, self.offset());

        self.last_lexeme = Some(lexeme.clone());
        Ok(MK_TOKEN!(category, Some(lexeme), MK_SPAN!(start, self.offset(), self.file)))
    }

    /// Iterates up to and including the first `EOF`, or the first error.
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    pub fn last_lexeme(&self) -> Option<&str> {
        self.last_lexeme.as_deref()
    }

    /// Byte offset of the cursor from the start of the source.
    pub fn offset(&self) -> usize {
        self.line_start + self.pos
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    fn remainder(&self) -> &str {
        &self.line[self.pos..]
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    // Ensures unconsumed text is buffered. `false` means the source is dry.
    fn fill(&mut self) -> Result<bool, Error> {
        while self.pos >= self.line.len() {
            self.line_start += self.line.len();
            self.line.clear();
            self.pos = 0;

            let read = match self.source.read_line(&mut self.line) {
                Ok(read) => read,
                Err(source) => {
                    // The reader may have consumed bytes we no longer hold.
                    let position = Position(self.line_start, Arc::clone(&self.file));
                    self.failure = Some((position.clone(), source.kind(), source.to_string()));
                    self.line.clear();
                    debug!("read failed in {} at offset {}: {}", self.file, self.line_start, source);
                    return Err(Error::new(ErrorImpl::SourceRead { source }, position));
                }
            };

            if read == 0 {
                return Ok(false);
            }

            debug!("read {} bytes of {} at offset {}", read, self.file, self.line_start);
        }

        Ok(true)
    }

    fn eof(&self) -> Token {
        MK_TOKEN!(Category::EOF, None, MK_SPAN!(self.offset(), self.offset(), self.file))
    }
}

impl Scanner<Cursor<String>> {
    pub fn from_string(source: String, file: Option<String>) -> Scanner<Cursor<String>> {
        Scanner::new(Cursor::new(source), file)
    }
}

pub struct Tokens<'a, R> {
    scanner: &'a mut Scanner<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Tokens<'_, R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.scanner.next_token();
        self.done = match &result {
            Ok(token) => token.category == Category::EOF,
            Err(_) => true,
        };

        Some(result)
    }
}

/// Scans a whole in-memory source. The last token is always `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::from_string(source, file);
    let tokens = scanner.tokens().collect::<Result<Vec<_>, _>>()?;
    Ok(tokens)
}
