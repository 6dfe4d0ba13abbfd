#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

/// Location of a token or an error in the original SQL source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Line number, starting from 1.
    pub line: u64,
    /// Column number, starting from 1.
    pub column: u64,
}

impl Default for Location {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {}, Col: {}", self.line, self.column)
    }
}

impl Location {
    /// Creates a location at the given line and column.
    pub fn new(line: u64, column: u64) -> Self {
        Self { line, column }
    }

    pub(crate) fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    pub(crate) fn into_error(self, message: impl Into<String>) -> TokenizeError {
        TokenizeError {
            message: message.into(),
            location: self,
        }
    }
}

/// Tokenizer error.
///
/// The only fatal lexical errors are unterminated literals and comments and
/// a missing close delimiter on a delimited identifier; everything else
/// lexes into some token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{message}")]
pub struct TokenizeError {
    /// The error message; messages that reference a source position embed
    /// it in `Line: {l}, Col: {c}` form.
    pub message: String,
    /// Where the tokenizer stopped.
    pub location: Location,
}

/// Parser error.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ParserError {
    /// The tokenizer failed before parsing began.
    #[error("{0}")]
    TokenizerError(String),
    /// A grammar mismatch, with the offending location embedded.
    #[error("{0}")]
    ParserError(String),
    /// The bounded-recursion guard tripped.
    #[error("Recursion limit exceeded.")]
    RecursionLimitExceeded,
}

impl From<TokenizeError> for ParserError {
    fn from(err: TokenizeError) -> Self {
        Self::TokenizerError(err.to_string())
    }
}

/// A helper to build a `ParserError::ParserError` result.
pub(crate) fn parse_error<R>(message: impl Into<String>) -> Result<R, ParserError> {
    Err(ParserError::ParserError(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display() {
        assert_eq!(Location::new(3, 14).to_string(), "Line: 3, Col: 14");
    }

    #[test]
    fn recursion_limit_message() {
        assert_eq!(
            ParserError::RecursionLimitExceeded.to_string(),
            "Recursion limit exceeded."
        );
    }
}
