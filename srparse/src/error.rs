//! Core source-location and error types used by the shift-reduce runtime.
//!
//! This module defines the small types lexers and parsers use for tracking
//! source locations, the [`ParserError`] enum reported by the engine, and
//! [`ParseFailure`], which pairs an error with the trace recorded up to the
//! point of failure. It also provides a `span!` macro for building
//! `Option<Span>` values inline (handy when populating tokens and errors).
//!
//! # Examples
//!
//! ```rust
//! # use srparse::{Position, Span, span};
//! let start = Position::new(0, 5);
//! let end   = Position::new(0, 10);
//! let sp = Span::new(start, end);
//! assert_eq!(sp.is_empty(), false);
//!
//! // Build an Option<Span> with the macro
//! let sp_opt = span!(0, 5, 0, 10);
//! assert_eq!(sp_opt, Some(sp));
//! ```

use crate::parser::{ParserData, ParserTokenID};
use crate::trace::Trace;
use thiserror::Error;

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (character position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open source range: `[start, end)`.
///
/// `Span` is used to mark the region of source text that a token covers, or
/// to attach precise locations to diagnostics.
///
/// Invariants are not enforced here, but it is conventional for `start <= end`
/// in lexicographic `(line, column)` ordering.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Start (or restart) this span at its current `end` position (empty span at end).
    /// Effect: span(x,y, z,w) -> span(z,w, z,w)
    pub fn collapse(&mut self) {
        self.start = self.end;
    }

    /// Is this span empty (start == end)?
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Pretty-print for diagnostics (human-readable).
    #[inline]
    pub fn display(&self) -> String {
        format!(
            "span {}:{} to {}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

/// Errors reported by the shift-reduce engine.
///
/// [`ParserError::Syntax`] is the ordinary outcome for input outside the
/// grammar. Every other variant points at a malformed table or a malformed
/// token sequence and is reported as an internal error
/// (see [`ParserError::is_internal`]). None of them abort the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError<T: ParserTokenID> {
    /// The action table has no shift/reduce/accept entry for the current
    /// `(state, lookahead)` pair.
    #[error("unexpected {token} in state {state}")]
    Syntax {
        /// The offending lookahead terminal.
        token: T,
        /// The state the automaton was in.
        state: usize,
        /// Source span of the offending terminal, if known.
        span: Option<Span>,
    },

    /// The goto table has no successor for the state exposed by a reduction.
    #[error("no goto entry for {nonterminal} in state {state}")]
    MissingGoto {
        /// The state exposed after popping the right-hand side.
        state: usize,
        /// Label of the reduced nonterminal.
        nonterminal: &'static str,
    },

    /// A reduction asked for more frames than the stack holds above its floor.
    #[error("stack underflow: reduction needs {needed} frames, stack holds {depth}")]
    StackUnderflow {
        /// Right-hand-side length of the production being reduced.
        needed: usize,
        /// Number of frames above the floor.
        depth: usize,
    },

    /// The token sequence ended before the parse was accepted.
    #[error("unexpected end of token stream")]
    UnexpectedEnd,

    /// The engine was given an empty token sequence.
    #[error("empty token sequence")]
    EmptyInput,

    /// The configured step bound was exceeded.
    #[error("step limit of {limit} exceeded")]
    StepLimit {
        /// The configured bound.
        limit: usize,
    },
}

impl<T: ParserTokenID> ParserError<T> {
    /// Returns `true` for structural errors caused by a malformed table or
    /// token sequence rather than by input outside the grammar.
    pub fn is_internal(&self) -> bool {
        !matches!(self, ParserError::Syntax { .. })
    }

    /// The offending terminal of a syntax error.
    pub fn token(&self) -> Option<T> {
        match self {
            ParserError::Syntax { token, .. } => Some(*token),
            _ => None,
        }
    }
}

/// A failed parse: the error together with the trace recorded before it.
///
/// The trace makes the failure reportable the same way a successful parse
/// is (every step taken up to the offending lookahead).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ParseFailure<D: ParserData> {
    /// What went wrong.
    pub error: ParserError<D::Terminal>,
    /// Steps and stack snapshots recorded before the failure.
    pub trace: Trace<D>,
}

/// Build an `Option<Span>` inline from 0-based line/column coordinates.
///
/// This macro returns `Some(Span { ... })`, which is convenient for
/// populating `span` fields of tokens and errors.
///
/// # Examples
///
/// ```rust
/// # use srparse::span;
/// let s = span!(0, 0, 1, 4);
/// assert_eq!(s.unwrap().end.column, 4);
/// ```
#[macro_export]
macro_rules! span {
    ($line_start:expr, $col_start:expr, $line_end:expr, $col_end:expr) => {
        Some($crate::Span {
            start: $crate::Position {
                line: $line_start,
                column: $col_start,
            },
            end: $crate::Position {
                line: $line_end,
                column: $col_end,
            },
        })
    };
}
