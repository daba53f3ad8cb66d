//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! # srparse-expr
//!
//! A recognizer for arithmetic expressions built on **srparse**: a small,
//! complete example of a tokenizer feeding a table-driven shift-reduce
//! engine.
//!
//! The grammar is fixed:
//!
//! ```text
//! 1. E -> E + T      4. T -> F
//! 2. E -> T          5. F -> ( E )
//! 3. T -> T * F      6. F -> id
//! ```
//!
//! where `id` stands for a run of digits or for a letter followed by letters
//! and digits.
//!
//! ## Example
//!
//! ```rust
//! use srparse_expr::{ExprError, ExprParser, Terminal};
//!
//! let parser = ExprParser::new();
//!
//! let rec = parser.recognize("id * ( id + id )").unwrap();
//! assert!(rec.derivation.trace.is_accepted());
//! assert_eq!(rec.derivation.stack.to_string(), "0E1");
//!
//! let err = parser.recognize("id + id )").unwrap_err();
//! assert_eq!(
//!     err.parser_error().and_then(|e| e.token()),
//!     Some(Terminal::RightParen)
//! );
//! assert!(matches!(parser.recognize("id # id"), Err(ExprError::Lexical(_))));
//! ```
//!
//! ## Modules
//!
//! - [`token`]: the [`ExprToken`] type
//! - [`parser_data`]: terminals, nonterminals, productions, and the action
//!   and goto tables
//! - [`lexer`]: tokenization
//! - [`parser`]: the tokenizer + engine pipeline
//! - [`error`]: the unified [`ExprError`]
//! - [`report`]: console rendering of tokens, steps and stack history

pub mod error;
pub mod lexer;
pub mod parser;
pub mod parser_data;
pub mod report;
pub mod token;

pub use error::ExprError;
pub use lexer::{ExprLexer, LexError, LexerStats};
pub use parser::{ExprParser, Recognition};
pub use parser_data::{Nonterminal, ParData, ProdID, StateID, TableError, Terminal};
pub use token::ExprToken;
