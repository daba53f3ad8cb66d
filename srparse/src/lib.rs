//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Table-driven shift-reduce parser runtime.
//!
//! `srparse` drives a deterministic pushdown automaton described by static
//! action and goto tables (see [`ParserData`]). The engine keeps an explicit
//! stack of `(symbol, state)` frames, records a derivation trace of shift,
//! reduce and accept steps, and reports input outside the grammar as an
//! ordinary [`ParserError::Syntax`] value.
//!
//! Grammars plug in by implementing the ID traits and [`ParserData`]; see the
//! `srparse-expr` crate for a complete example.

mod cursor;
mod error;
mod parser;
mod stack;
mod trace;

#[cfg(test)]
mod test_parser_data;

pub use crate::cursor::LexerCursor;
pub use crate::error::{ParseFailure, ParserError, Position, Span};
pub use crate::parser::{
    Parser, ParserAction, ParserConfig, ParserData, ParserProdID, ParserStateID, ParserStats,
    ParserTokenID, Token,
};
pub use crate::stack::{Frame, Stack, Symbol};
pub use crate::trace::{Derivation, Step, Trace};
