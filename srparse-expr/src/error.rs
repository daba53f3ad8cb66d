//! # Recognizer Error Type
//!
//! This module defines [`ExprError`], the single error surface of the
//! expression recognizer. It aggregates failures from:
//!
//! - **Tokenization** (text → tokens), see [`LexError`],
//! - **Parsing** (tokens → derivation), see [`ParseFailure`].
//!
//! Both conversions are derived with `#[from]`, so pipeline functions can
//! propagate either stage with `?`.
use crate::{LexError, ParData};
use srparse::{ParseFailure, ParserError, Trace};
use thiserror::Error;

/// Represents everything that can go wrong while recognizing one line.
///
/// # Examples
/// ```rust
/// # use srparse_expr::{ExprError, ExprParser};
/// let err = ExprParser::new().recognize("id # id").unwrap_err();
/// assert!(matches!(err, ExprError::Lexical(_)));
/// ```
#[derive(Debug, Error)]
pub enum ExprError {
    /// The input contains a character outside the token alphabet.
    #[error("lexical error: {0}")]
    Lexical(#[from] LexError),

    /// The tokens do not form a sentence of the grammar.
    ///
    /// Carries the trace recorded up to the offending lookahead.
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseFailure<ParData>),
}

impl ExprError {
    /// The partial trace of a syntax failure; `None` for lexical failures,
    /// which stop before the engine runs.
    pub fn trace(&self) -> Option<&Trace<ParData>> {
        match self {
            ExprError::Lexical(_) => None,
            ExprError::Syntax(failure) => Some(&failure.trace),
        }
    }

    /// True for failures caused by malformed tables rather than input.
    pub fn is_internal(&self) -> bool {
        match self {
            ExprError::Lexical(_) => false,
            ExprError::Syntax(failure) => failure.error.is_internal(),
        }
    }

    /// The engine error of a syntax failure.
    pub fn parser_error(&self) -> Option<&ParserError<crate::Terminal>> {
        match self {
            ExprError::Lexical(_) => None,
            ExprError::Syntax(failure) => Some(&failure.error),
        }
    }
}
