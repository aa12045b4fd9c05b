//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of one source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The Category
/// * `$lexeme` - The matched text, `None` for `EOF`
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(Category::Numeral, Some("42".to_string()), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $lexeme:expr, $span:expr) => {
        Token {
            category: $category,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Creates a Span from `$start` to `$end` in the source named by `$file`
/// (an `Arc<String>`).
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position($start, Arc::clone(&$file)),
            end: Position($end, Arc::clone(&$file)),
        }
    };
}
