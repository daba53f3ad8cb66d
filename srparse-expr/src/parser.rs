//! # Expression Recognizer
//!
//! This module couples the expression tokenizer with the shift-reduce engine
//! running over the fixed tables in [`parser_data`](crate::parser_data).
//!
//! [`ExprParser`] is a thin adapter: it owns an engine configured by
//! [`ParserConfig`], runs [`ExprLexer`] over a line of text, and hands the
//! tokens to [`srparse::Parser`]. The engine is never invoked when the
//! tokenizer fails.

use crate::{ExprError, ExprLexer, ExprToken, LexError, LexerStats, ParData};
use srparse::{Derivation, ParseFailure, Parser, ParserConfig};

/// The outcome of recognizing one line: the tokens and the derivation the
/// engine produced for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    /// Tokens in input order, ending with the end-marker.
    pub tokens: Vec<ExprToken>,
    pub lexer_stats: LexerStats,
    pub derivation: Derivation<ParData>,
}

/// Recognizer for the expression grammar
///
/// ```text
/// 1. E -> E + T      4. T -> F
/// 2. E -> T          5. F -> ( E )
/// 3. T -> T * F      6. F -> id
/// ```
///
/// `ExprParser` is immutable once built; [`recognize`](ExprParser::recognize)
/// takes `&self`, so one instance can be shared by several threads.
///
/// # Example
/// ```rust
/// # use srparse_expr::ExprParser;
/// let parser = ExprParser::new();
/// let rec = parser.recognize("id + id").unwrap();
/// assert_eq!(
///     rec.derivation.trace.codes(),
///     ["S5", "R6", "R4", "R2", "S6", "S5", "R6", "R4", "R1", "ACCEPT"]
/// );
/// assert_eq!(rec.derivation.stack.to_string(), "0E1");
/// ```
#[derive(Debug, Clone)]
pub struct ExprParser {
    parser: Parser<ParData>,
}

impl Default for ExprParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        debug_assert!(ParData::validate().is_ok(), "malformed expression tables");
        Self {
            parser: Parser::new(config),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        self.parser.config()
    }

    /// Runs only the tokenizer.
    pub fn tokenize(&self, input: &str) -> Result<Vec<ExprToken>, LexError> {
        ExprLexer::new(input).try_tokenize()
    }

    /// Runs only the engine over an already tokenized line.
    pub fn parse(&self, tokens: &[ExprToken]) -> Result<Derivation<ParData>, ParseFailure<ParData>> {
        self.parser.parse(tokens)
    }

    /// Tokenizes and parses `input`.
    pub fn recognize(&self, input: &str) -> Result<Recognition, ExprError> {
        let mut lexer = ExprLexer::new(input);
        let tokens = lexer.try_tokenize()?;
        let lexer_stats = lexer.stats().clone();
        let derivation = self.parse(&tokens)?;
        log::debug!(
            "accepted {:?}: {} shifts, {} reductions",
            input,
            derivation.stats.shifts,
            derivation.stats.reductions
        );
        Ok(Recognition {
            tokens,
            lexer_stats,
            derivation,
        })
    }
}
