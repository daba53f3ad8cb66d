//! # Console Report
//!
//! Plain-text rendering of a recognition outcome in the layout of the
//! interactive console program: a "Calling Lexer" block echoing every token,
//! a "Parsing Steps" block with one `S<n>`/`R<n>`/`ACCEPT` code per line,
//! and a "Stack" block listing the stack configuration after every shift
//! and reduce. Blocks are separated by dashed rules.
//!
//! Each piece is a small [`Display`](fmt::Display) adapter, so callers can
//! write straight to a terminal or collect into a string.

use crate::{ExprParser, ExprToken, LexError, ParData, Terminal};
use srparse::{Derivation, ParseFailure, ParserError, Trace};
use std::fmt;

pub const RULE: &str = "----------------------------------";

/// Writes a block heading framed by dashed rules.
fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{RULE}")
}

/// One `lexeme: terminal` line per token; the end-marker is not echoed.
pub struct TokenListing<'a>(pub &'a [ExprToken]);

impl fmt::Display for TokenListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.0.iter().filter(|t| !t.is_end()) {
            writeln!(f, "{token}")?;
        }
        Ok(())
    }
}

/// The step codes of a trace, one per line.
pub struct Steps<'a>(pub &'a Trace<ParData>);

impl fmt::Display for Steps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.0.steps {
            writeln!(f, "{}", step.code())?;
        }
        Ok(())
    }
}

/// The recorded stack configurations of a trace, one per line.
pub struct History<'a>(pub &'a Trace<ParData>);

impl fmt::Display for History<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stack in &self.0.history {
            writeln!(f, "{stack}")?;
        }
        Ok(())
    }
}

/// The console message for a lexical failure.
pub fn lex_error(err: &LexError) -> String {
    format!(
        "Error: Lexer Detected Invalid Input ({}). Process Terminated.",
        err.text
    )
}

/// The console message for an engine failure.
pub fn syntax_error(err: &ParserError<Terminal>) -> String {
    match err {
        ParserError::Syntax { token, .. } => {
            format!("Error: Parser detected invalid input {token}.")
        }
        internal => format!("Error: Parser failed internally ({internal})."),
    }
}

/// The full report for one line of input.
///
/// Unlike [`ExprParser::recognize`], the report keeps the tokens of a
/// successful scan even when the engine then rejects them, so the lexer
/// block is always echoed.
///
/// # Example
/// ```rust
/// # use srparse_expr::{ExprParser, report::Report};
/// let report = Report::run(&ExprParser::new(), "+ id");
/// assert!(!report.is_accepted());
/// assert!(report.to_string().ends_with("Error: Parser detected invalid input +.\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    pub tokens: Result<Vec<ExprToken>, LexError>,
    /// Engine outcome; `None` when the scan failed.
    pub parse: Option<Result<Derivation<ParData>, ParseFailure<ParData>>>,
}

impl Report {
    pub fn run(parser: &ExprParser, input: &str) -> Self {
        let tokens = parser.tokenize(input);
        let parse = tokens.as_ref().ok().map(|tokens| parser.parse(tokens));
        Self { tokens, parse }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.parse, Some(Ok(_)))
    }

    pub fn derivation(&self) -> Option<&Derivation<ParData>> {
        self.parse.as_ref().and_then(|parse| parse.as_ref().ok())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "Calling Lexer:")?;
        let tokens = match &self.tokens {
            Ok(tokens) => tokens,
            Err(err) => return writeln!(f, "{}", lex_error(err)),
        };
        write!(f, "{}", TokenListing(tokens))?;
        heading(f, "Parsing Steps")?;
        match &self.parse {
            None => Ok(()),
            Some(Err(failure)) => {
                write!(f, "{}", Steps(&failure.trace))?;
                writeln!(f, "{}", syntax_error(&failure.error))
            }
            Some(Ok(derivation)) => {
                write!(f, "{}", Steps(&derivation.trace))?;
                if !derivation.trace.history.is_empty() {
                    heading(f, "Stack")?;
                    write!(f, "{}", History(&derivation.trace))?;
                }
                Ok(())
            }
        }
    }
}
