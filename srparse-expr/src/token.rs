//! # Expression Tokens
//!
//! This module defines [`ExprToken`], the concrete token produced by the
//! expression lexer and consumed by the shift-reduce engine. A token pairs a
//! [`Terminal`] with the source text it was recognized from and its span, so
//! a presentation layer can echo each lexeme next to its terminal
//! (`123: id`, `+: +`).
use crate::Terminal;
use smartstring::alias::String;
use srparse::{Span, Token};
use std::fmt;

/// A lexical token of the expression language.
///
/// Identifiers and numbers both become [`Terminal::Id`]; the original text
/// is kept in `text`. The end-marker token ([`Terminal::End`]) has empty
/// text and an empty span at the end of the input.
///
/// # Example
/// ```rust
/// # use srparse_expr::{ExprToken, Terminal};
/// # use srparse::{Token, span};
/// let tok = ExprToken {
///     token_id: Terminal::Id,
///     text: "abc".into(),
///     span: span!(0, 0, 0, 3),
/// };
///
/// assert_eq!(tok.token_id(), Terminal::Id);
/// assert_eq!(tok.to_string(), "abc: id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprToken {
    /// The terminal this token stands for.
    pub token_id: Terminal,
    /// The source text of the token.
    pub text: String,
    /// Where the token occurs in the input.
    pub span: Option<Span>,
}

impl ExprToken {
    pub fn is_end(&self) -> bool {
        self.token_id == Terminal::End
    }
}

impl Token for ExprToken {
    type TokenID = Terminal;

    fn token_id(&self) -> Terminal {
        self.token_id
    }

    fn span(&self) -> Option<Span> {
        self.span
    }
}

/// Renders the lexer echo line: `<text>: <terminal>`.
impl fmt::Display for ExprToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.text, self.token_id)
    }
}
