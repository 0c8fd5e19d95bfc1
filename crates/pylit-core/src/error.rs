//! Error types for the scan → parse → convert pipeline.

use thiserror::Error;

/// Errors that can abort the pipeline. All are fatal for the call that
/// raised them: no partial result is produced and nothing is retried.
#[derive(Error, Debug)]
pub enum PylitError {
    /// The scanner hit a character no lexeme can start with (or a `-` with
    /// no digits after it). Reports the character, its Unicode code point,
    /// and the character offset in the input.
    #[error("scan error: unexpected character {ch:?} (U+{code:04X}) at offset {offset}")]
    Scan { ch: char, code: u32, offset: usize },

    /// The parser saw a token the grammar does not allow at this point.
    /// Reports the expected token kind, the actual kind, and the offset of
    /// the offending token.
    #[error("syntax error: expected {expected}, found {found} at offset {offset}")]
    Syntax {
        expected: &'static str,
        found: &'static str,
        offset: usize,
    },

    /// Input nesting exceeded the parser's recursion cap. Raised instead of
    /// overflowing the call stack on adversarially deep input.
    #[error("nesting deeper than {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },

    /// A validator limit was exceeded (nesting depth, container length,
    /// string length, or a non-finite float in the tree).
    #[error("limit exceeded: {0}")]
    Limit(String),

    /// JSON serialization failed while rendering converter output.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout pylit-core.
pub type Result<T> = std::result::Result<T, PylitError>;
